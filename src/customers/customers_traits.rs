use async_trait::async_trait;

use super::customers_model::{Customer, CustomerUpdate, NewCustomer};
use crate::customers::Result;

/// Trait defining the contract for customer registry operations.
#[async_trait]
pub trait CustomerServiceTrait: Send + Sync {
    async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer>;
    async fn update_customer(&self, customer_update: CustomerUpdate) -> Result<Customer>;
    async fn delete_customer(&self, customer_id: &str) -> Result<()>;
    fn get_customer(&self, customer_id: &str) -> Result<Customer>;
    fn list_customers(&self) -> Result<Vec<Customer>>;
}
