use async_trait::async_trait;

use super::payments_model::{NewPayment, Payment};
use crate::payments::Result;

/// Trait defining the contract for payment ledger operations.
#[async_trait]
pub trait PaymentServiceTrait: Send + Sync {
    async fn create_payment(&self, new_payment: NewPayment) -> Result<Payment>;
    fn get_payments_by_deposit(&self, deposit_ref: &str) -> Result<Vec<Payment>>;
    fn get_payments(&self) -> Result<Vec<Payment>>;
    fn total_for_deposit(&self, deposit_ref: &str) -> Result<f64>;
}
