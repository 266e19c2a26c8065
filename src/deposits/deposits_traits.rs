use async_trait::async_trait;

use super::deposits_model::{Deposit, NewDeposit};
use crate::deposits::Result;

/// Trait defining the contract for deposit ledger operations.
#[async_trait]
pub trait DepositServiceTrait: Send + Sync {
    async fn create_deposit(&self, new_deposit: NewDeposit) -> Result<Deposit>;
    fn get_deposits_by_customer(&self, customer_id: &str) -> Result<Vec<Deposit>>;
    fn find_by_reference(&self, reference: &str) -> Result<Deposit>;
    fn get_deposits(&self) -> Result<Vec<Deposit>>;
}
