use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::customers_model::{Customer, CustomerUpdate, NewCustomer};
use super::customers_repository::CustomerRepository;
use crate::customers::{CustomerServiceTrait, Result};

/// Service for managing customers
pub struct CustomerService {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl CustomerService {
    /// Creates a new CustomerService instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CustomerServiceTrait for CustomerService {
    /// Creates a new customer with a zero gold weight total
    async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer> {
        debug!("Creating customer..., name: {}", new_customer.name);
        let repo = CustomerRepository::new(self.pool.clone());
        repo.create(new_customer)
    }

    /// Updates the editable fields of an existing customer
    async fn update_customer(&self, customer_update: CustomerUpdate) -> Result<Customer> {
        let repo = CustomerRepository::new(self.pool.clone());
        repo.update(customer_update)
    }

    /// Deletes a customer and cascades to its deposits and payments
    async fn delete_customer(&self, customer_id: &str) -> Result<()> {
        debug!("Deleting customer..., id: {}", customer_id);
        let repo = CustomerRepository::new(self.pool.clone());
        repo.delete(customer_id)?;
        Ok(())
    }

    /// Retrieves a customer by its ID
    fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        let repo = CustomerRepository::new(self.pool.clone());
        repo.get_by_id(customer_id)
    }

    /// Lists all customers
    fn list_customers(&self) -> Result<Vec<Customer>> {
        let repo = CustomerRepository::new(self.pool.clone());
        repo.list()
    }
}
