// Module declarations
pub(crate) mod deposits_errors;
pub(crate) mod deposits_model;
pub(crate) mod deposits_repository;
pub(crate) mod deposits_service;
pub(crate) mod deposits_traits;

// Re-export the public interface
pub use deposits_model::{Deposit, DepositDB, DepositStatus, NewDeposit};
pub use deposits_repository::DepositRepository;
pub use deposits_service::DepositService;
pub use deposits_traits::DepositServiceTrait;

// Re-export error types for convenience
pub use deposits_errors::{DepositError, Result};
