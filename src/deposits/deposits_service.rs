use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::deposits_model::{Deposit, NewDeposit};
use super::deposits_repository::DepositRepository;
use crate::deposits::{DepositServiceTrait, Result};

/// Service for the deposit ledger
pub struct DepositService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl DepositService {
    /// Creates a new DepositService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DepositServiceTrait for DepositService {
    /// Creates a deposit, freezing the current gold rate into it and
    /// incrementing the owning customer's gold weight total in the same
    /// transaction.
    async fn create_deposit(&self, new_deposit: NewDeposit) -> Result<Deposit> {
        debug!(
            "Creating deposit..., customer_id: {}, amount: {}",
            new_deposit.customer_id, new_deposit.amount
        );
        let repo = DepositRepository::new(self.pool.clone());
        repo.create(new_deposit)
    }

    /// Retrieves all deposits of one customer
    fn get_deposits_by_customer(&self, customer_id: &str) -> Result<Vec<Deposit>> {
        let repo = DepositRepository::new(self.pool.clone());
        repo.list_by_customer(customer_id)
    }

    /// Looks a deposit up by its human-readable reference
    fn find_by_reference(&self, reference: &str) -> Result<Deposit> {
        let repo = DepositRepository::new(self.pool.clone());
        repo.find_by_reference(reference)
    }

    /// Lists all deposits
    fn get_deposits(&self) -> Result<Vec<Deposit>> {
        let repo = DepositRepository::new(self.pool.clone());
        repo.list()
    }
}
