use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;

use crate::constants::DEPOSIT_REF_PREFIX;
use crate::customers::{CustomerDB, CustomerRepository};
use crate::db::get_connection;
use crate::deposits::deposits_errors::{DepositError, Result};
use crate::rates::GoldRateDB;
use crate::schema::{customers, deposits, gold_rates};

use super::deposits_model::{Deposit, DepositDB, DepositStatus, NewDeposit};

/// Repository for the deposit ledger
pub struct DepositRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl DepositRepository {
    /// Creates a new DepositRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Creates a deposit as one transaction: customer lookup, rate snapshot,
    /// weight computation, deposit insert and customer weight increment all
    /// commit together or not at all. The rate read inside the transaction is
    /// the frozen `gold_rate_at_deposit`; later rate changes never touch it.
    pub fn create(&self, new_deposit: NewDeposit) -> Result<Deposit> {
        new_deposit.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| DepositError::DatabaseError(e.to_string()))?;

        conn.transaction::<Deposit, DepositError, _>(|tx_conn| {
            let customer = customers::table
                .find(&new_deposit.customer_id)
                .first::<CustomerDB>(tx_conn)
                .optional()
                .map_err(|e| DepositError::DatabaseError(e.to_string()))?
                .ok_or_else(|| {
                    DepositError::CustomerNotFound(format!(
                        "Customer with id {} not found",
                        new_deposit.customer_id
                    ))
                })?;

            let rate = gold_rates::table
                .order((gold_rates::created_at.desc(), gold_rates::id.desc()))
                .first::<GoldRateDB>(tx_conn)
                .optional()
                .map_err(|e| DepositError::DatabaseError(e.to_string()))?
                .ok_or_else(|| {
                    DepositError::RateUnavailable("gold rate history is empty".to_string())
                })?;

            // Full-precision division; rounding is display-only.
            let gold_weight = new_deposit.amount / rate.price_per_gram;

            let deposit_db = DepositDB {
                id: uuid::Uuid::new_v4().to_string(),
                deposit_ref: Self::generate_reference(tx_conn)?,
                customer_id: customer.id.clone(),
                customer_name: customer.name.clone(),
                amount: new_deposit.amount,
                gold_weight,
                gold_rate_at_deposit: rate.price_per_gram,
                status: DepositStatus::Active.as_str().to_string(),
                created_at: Utc::now().naive_utc(),
            };

            diesel::insert_into(deposits::table)
                .values(&deposit_db)
                .execute(tx_conn)
                .map_err(|e| DepositError::DatabaseError(e.to_string()))?;

            CustomerRepository::increment_gold_weight(tx_conn, &customer.id, gold_weight)
                .map_err(|e| DepositError::DatabaseError(e.to_string()))?;

            Ok(deposit_db.into())
        })
    }

    /// Retrieves all deposits of one customer, newest first
    pub fn list_by_customer(&self, customer_id: &str) -> Result<Vec<Deposit>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| DepositError::DatabaseError(e.to_string()))?;

        deposits::table
            .filter(deposits::customer_id.eq(customer_id))
            .order(deposits::created_at.desc())
            .load::<DepositDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Deposit::from).collect())
            .map_err(DepositError::from)
    }

    /// Looks a deposit up by its human-readable reference
    pub fn find_by_reference(&self, reference: &str) -> Result<Deposit> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| DepositError::DatabaseError(e.to_string()))?;

        deposits::table
            .filter(deposits::deposit_ref.eq(reference))
            .first::<DepositDB>(&mut conn)
            .map(Deposit::from)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => DepositError::NotFound(format!(
                    "Deposit with reference {} not found",
                    reference
                )),
                _ => DepositError::DatabaseError(e.to_string()),
            })
    }

    /// Lists all deposits, newest first
    pub fn list(&self) -> Result<Vec<Deposit>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| DepositError::DatabaseError(e.to_string()))?;

        deposits::table
            .order(deposits::created_at.desc())
            .load::<DepositDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Deposit::from).collect())
            .map_err(DepositError::from)
    }

    /// Total number of deposits in the ledger
    pub fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| DepositError::DatabaseError(e.to_string()))?;

        deposits::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(DepositError::from)
    }

    /// Generates a reference of the form `DEP-<millis>-<4 alphanumerics>`.
    /// The millisecond prefix keeps references sortable in creation order;
    /// the random suffix disambiguates same-millisecond creations. Runs
    /// inside the insert transaction, so checking the ledger for collisions
    /// before using a candidate is race-free.
    fn generate_reference(conn: &mut SqliteConnection) -> Result<String> {
        loop {
            let suffix: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(4)
                .map(|b| (b as char).to_ascii_uppercase())
                .collect();
            let candidate = format!(
                "{}-{}-{}",
                DEPOSIT_REF_PREFIX,
                Utc::now().timestamp_millis(),
                suffix
            );

            let taken: bool = diesel::select(diesel::dsl::exists(
                deposits::table.filter(deposits::deposit_ref.eq(&candidate)),
            ))
            .get_result(conn)
            .map_err(|e| DepositError::DatabaseError(e.to_string()))?;

            if !taken {
                return Ok(candidate);
            }
        }
    }
}
