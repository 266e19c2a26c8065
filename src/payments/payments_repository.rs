use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::deposits::DepositDB;
use crate::payments::payments_errors::{PaymentError, Result};
use crate::schema::{deposits, payments};

use super::payments_model::{NewPayment, Payment, PaymentDB};

/// Repository for the payment ledger
pub struct PaymentRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl PaymentRepository {
    /// Creates a new PaymentRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Records a payment against an existing deposit. The customer name is
    /// denormalized from the deposit row; a customer id that does not match
    /// the deposit's owner is rejected before anything is written. There is
    /// deliberately no cap against the deposit's principal.
    pub fn create(&self, new_payment: NewPayment) -> Result<Payment> {
        new_payment.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| PaymentError::DatabaseError(e.to_string()))?;

        conn.transaction::<Payment, PaymentError, _>(|tx_conn| {
            let deposit = deposits::table
                .filter(deposits::deposit_ref.eq(&new_payment.deposit_ref))
                .first::<DepositDB>(tx_conn)
                .optional()
                .map_err(|e| PaymentError::DatabaseError(e.to_string()))?
                .ok_or_else(|| {
                    PaymentError::DepositNotFound(format!(
                        "Deposit with reference {} not found",
                        new_payment.deposit_ref
                    ))
                })?;

            if deposit.customer_id != new_payment.customer_id {
                return Err(PaymentError::InvalidData(format!(
                    "Deposit {} does not belong to customer {}",
                    new_payment.deposit_ref, new_payment.customer_id
                )));
            }

            let payment_db = PaymentDB {
                id: uuid::Uuid::new_v4().to_string(),
                deposit_ref: deposit.deposit_ref.clone(),
                customer_id: deposit.customer_id.clone(),
                customer_name: deposit.customer_name.clone(),
                amount: new_payment.amount,
                channel: new_payment.channel.as_str().to_string(),
                created_at: Utc::now().naive_utc(),
            };

            diesel::insert_into(payments::table)
                .values(&payment_db)
                .execute(tx_conn)
                .map_err(|e| PaymentError::DatabaseError(e.to_string()))?;

            Ok(payment_db.into())
        })
    }

    /// Retrieves all payments applied against one deposit, newest first
    pub fn list_by_deposit(&self, deposit_ref: &str) -> Result<Vec<Payment>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| PaymentError::DatabaseError(e.to_string()))?;

        payments::table
            .filter(payments::deposit_ref.eq(deposit_ref))
            .order(payments::created_at.desc())
            .load::<PaymentDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Payment::from).collect())
            .map_err(PaymentError::from)
    }

    /// Lists all payments, newest first
    pub fn list(&self) -> Result<Vec<Payment>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| PaymentError::DatabaseError(e.to_string()))?;

        payments::table
            .order(payments::created_at.desc())
            .load::<PaymentDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Payment::from).collect())
            .map_err(PaymentError::from)
    }

    /// Sum of all payments against one deposit. Derived on every call,
    /// never cached.
    pub fn total_for_deposit(&self, deposit_ref: &str) -> Result<f64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| PaymentError::DatabaseError(e.to_string()))?;

        payments::table
            .filter(payments::deposit_ref.eq(deposit_ref))
            .select(diesel::dsl::sum(payments::amount))
            .first::<Option<f64>>(&mut conn)
            .map(|total| total.unwrap_or(0.0))
            .map_err(PaymentError::from)
    }

    /// Sum of all payments across the whole ledger
    pub fn total_collected(&self) -> Result<f64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| PaymentError::DatabaseError(e.to_string()))?;

        payments::table
            .select(diesel::dsl::sum(payments::amount))
            .first::<Option<f64>>(&mut conn)
            .map(|total| total.unwrap_or(0.0))
            .map_err(PaymentError::from)
    }

    /// Sum of all payments belonging to one customer, across deposits
    pub fn total_for_customer(&self, customer_id: &str) -> Result<f64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| PaymentError::DatabaseError(e.to_string()))?;

        payments::table
            .filter(payments::customer_id.eq(customer_id))
            .select(diesel::dsl::sum(payments::amount))
            .first::<Option<f64>>(&mut conn)
            .map(|total| total.unwrap_or(0.0))
            .map_err(PaymentError::from)
    }
}
