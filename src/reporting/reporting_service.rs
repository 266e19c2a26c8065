use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::reporting_model::{CustomerProfile, DashboardStats};
use crate::customers::{CustomerRepository, CustomerServiceTrait};
use crate::deposits::DepositRepository;
use crate::errors::Result;
use crate::payments::PaymentRepository;
use crate::rates::RateServiceTrait;
use crate::reporting::ReportingServiceTrait;

/// Read-side composition over the three ledgers. Owns no state; every query
/// recomputes from the ledgers, so the answers can never be stale.
pub struct ReportingService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    rate_service: Arc<dyn RateServiceTrait>,
    customer_service: Arc<dyn CustomerServiceTrait>,
}

impl ReportingService {
    /// Creates a new ReportingService instance with injected dependencies
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        rate_service: Arc<dyn RateServiceTrait>,
        customer_service: Arc<dyn CustomerServiceTrait>,
    ) -> Self {
        Self {
            pool,
            rate_service,
            customer_service,
        }
    }
}

impl ReportingServiceTrait for ReportingService {
    /// Counts and sums for the dashboard
    fn dashboard_stats(&self) -> Result<DashboardStats> {
        let current_rate = self.rate_service.current_rate()?;
        let customer_count = CustomerRepository::new(self.pool.clone()).count()?;
        let deposit_count = DepositRepository::new(self.pool.clone()).count()?;
        let total_payments_collected =
            PaymentRepository::new(self.pool.clone()).total_collected()?;

        Ok(DashboardStats {
            current_rate,
            customer_count,
            deposit_count,
            total_payments_collected,
        })
    }

    /// One customer's record, deposits and payment total in one read
    fn customer_profile(&self, customer_id: &str) -> Result<CustomerProfile> {
        let customer = self.customer_service.get_customer(customer_id)?;
        let deposits = DepositRepository::new(self.pool.clone()).list_by_customer(customer_id)?;
        let total_paid_across_deposits =
            PaymentRepository::new(self.pool.clone()).total_for_customer(customer_id)?;

        Ok(CustomerProfile {
            customer,
            deposits,
            total_paid_across_deposits,
        })
    }
}
