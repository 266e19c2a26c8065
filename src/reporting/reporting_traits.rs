use super::reporting_model::{CustomerProfile, DashboardStats};
use crate::errors::Result;

/// Trait defining the contract for the read-side reporting queries.
pub trait ReportingServiceTrait: Send + Sync {
    fn dashboard_stats(&self) -> Result<DashboardStats>;
    fn customer_profile(&self, customer_id: &str) -> Result<CustomerProfile>;
}
