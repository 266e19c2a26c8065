// Module declarations
pub(crate) mod reporting_model;
pub(crate) mod reporting_service;
pub(crate) mod reporting_traits;

// Re-export the public interface
pub use reporting_model::{CustomerProfile, DashboardStats};
pub use reporting_service::ReportingService;
pub use reporting_traits::ReportingServiceTrait;
