use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::payments_model::{NewPayment, Payment};
use super::payments_repository::PaymentRepository;
use crate::payments::{PaymentServiceTrait, Result};

/// Service for the payment ledger
pub struct PaymentService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl PaymentService {
    /// Creates a new PaymentService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PaymentServiceTrait for PaymentService {
    /// Records a payment against an existing deposit
    async fn create_payment(&self, new_payment: NewPayment) -> Result<Payment> {
        debug!(
            "Creating payment..., deposit_ref: {}, amount: {}",
            new_payment.deposit_ref, new_payment.amount
        );
        let repo = PaymentRepository::new(self.pool.clone());
        repo.create(new_payment)
    }

    /// Retrieves all payments applied against one deposit
    fn get_payments_by_deposit(&self, deposit_ref: &str) -> Result<Vec<Payment>> {
        let repo = PaymentRepository::new(self.pool.clone());
        repo.list_by_deposit(deposit_ref)
    }

    /// Lists all payments
    fn get_payments(&self) -> Result<Vec<Payment>> {
        let repo = PaymentRepository::new(self.pool.clone());
        repo.list()
    }

    /// Derived sum of payments against one deposit
    fn total_for_deposit(&self, deposit_ref: &str) -> Result<f64> {
        let repo = PaymentRepository::new(self.pool.clone());
        repo.total_for_deposit(deposit_ref)
    }
}
