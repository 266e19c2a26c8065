// Module declarations
pub(crate) mod rates_errors;
pub(crate) mod rates_model;
pub(crate) mod rates_repository;
pub(crate) mod rates_service;
pub(crate) mod rates_traits;

// Re-export the public interface
pub use rates_model::{GoldRateDB, GoldRateRecord, NewGoldRate};
pub use rates_repository::RateRepository;
pub use rates_service::RateService;
pub use rates_traits::RateServiceTrait;

// Re-export error types for convenience
pub use rates_errors::{RateError, Result};
