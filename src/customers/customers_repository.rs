use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::customers::customers_errors::{CustomerError, Result};
use crate::db::get_connection;
use crate::schema::{customers, deposits, payments};

use super::customers_model::{Customer, CustomerDB, CustomerUpdate, NewCustomer};

/// Repository for managing customer data in the database
pub struct CustomerRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a new customer in the database
    pub fn create(&self, new_customer: NewCustomer) -> Result<Customer> {
        new_customer.validate()?;

        let mut customer_db: CustomerDB = new_customer.into();
        customer_db.id = uuid::Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        diesel::insert_into(customers::table)
            .values(&customer_db)
            .execute(&mut conn)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        Ok(customer_db.into())
    }

    /// Updates the editable fields of an existing customer. The derived
    /// gold weight and the creation timestamp are carried over unchanged.
    pub fn update(&self, customer_update: CustomerUpdate) -> Result<Customer> {
        customer_update.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        let existing = customers::table
            .find(&customer_update.id)
            .first::<CustomerDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => CustomerError::NotFound(format!(
                    "Customer with id {} not found",
                    customer_update.id
                )),
                _ => CustomerError::DatabaseError(e.to_string()),
            })?;

        let customer_db = CustomerDB {
            id: existing.id.clone(),
            name: customer_update.name,
            mobile: customer_update.mobile,
            address: customer_update.address,
            avatar: customer_update.avatar,
            total_gold_weight: existing.total_gold_weight,
            created_at: existing.created_at,
            updated_at: chrono::Utc::now().naive_utc(),
        };

        diesel::update(customers::table.find(&existing.id))
            .set(&customer_db)
            .execute(&mut conn)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        Ok(customer_db.into())
    }

    /// Retrieves a customer by its ID
    pub fn get_by_id(&self, customer_id: &str) -> Result<Customer> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        let customer = customers::table
            .find(customer_id)
            .first::<CustomerDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    CustomerError::NotFound(format!("Customer with id {} not found", customer_id))
                }
                _ => CustomerError::DatabaseError(e.to_string()),
            })?;

        Ok(customer.into())
    }

    /// Lists all customers, newest first
    pub fn list(&self) -> Result<Vec<Customer>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        customers::table
            .order(customers::created_at.desc())
            .load::<CustomerDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Customer::from).collect())
            .map_err(CustomerError::from)
    }

    /// Total number of customers
    pub fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        customers::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(CustomerError::from)
    }

    /// Deletes a customer together with all deposits and payments owned by
    /// it. The cascade runs in one transaction so observers never see a
    /// deposit or payment referencing a deleted customer.
    pub fn delete(&self, customer_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        conn.transaction::<usize, CustomerError, _>(|tx_conn| {
            diesel::delete(payments::table.filter(payments::customer_id.eq(customer_id)))
                .execute(tx_conn)
                .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

            diesel::delete(deposits::table.filter(deposits::customer_id.eq(customer_id)))
                .execute(tx_conn)
                .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

            let affected = diesel::delete(customers::table.find(customer_id))
                .execute(tx_conn)
                .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

            if affected == 0 {
                return Err(CustomerError::NotFound(format!(
                    "Customer with id {} not found",
                    customer_id
                )));
            }

            Ok(affected)
        })
    }

    /// Adds `delta` to the customer's running gold weight total. Invoked by
    /// the deposit ledger inside the deposit-creation transaction; the SQL
    /// increment is commutative so concurrent deposits cannot lose updates.
    pub(crate) fn increment_gold_weight(
        conn: &mut SqliteConnection,
        customer_id: &str,
        delta: f64,
    ) -> Result<()> {
        let affected = diesel::update(customers::table.find(customer_id))
            .set(customers::total_gold_weight.eq(customers::total_gold_weight + delta))
            .execute(conn)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(CustomerError::NotFound(format!(
                "Customer with id {} not found",
                customer_id
            )));
        }

        Ok(())
    }
}
