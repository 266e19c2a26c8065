use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::rates::rates_errors::{RateError, Result};
use crate::schema::gold_rates;
use crate::schema::gold_rates::dsl::*;

use super::rates_model::{GoldRateDB, GoldRateRecord, NewGoldRate};

/// Repository for the append-only gold rate history
pub struct RateRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl RateRepository {
    /// Creates a new RateRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Appends a rate entry. History rows are never updated or deleted.
    pub fn append(&self, new_rate: NewGoldRate) -> Result<GoldRateRecord> {
        new_rate.validate()?;

        let mut rate_db: GoldRateDB = new_rate.into();
        rate_db.id = uuid::Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        diesel::insert_into(gold_rates::table)
            .values(&rate_db)
            .execute(&mut conn)
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        Ok(rate_db.into())
    }

    /// Returns the newest history entry, which defines the current rate.
    pub fn latest(&self) -> Result<GoldRateRecord> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        gold_rates
            .order((created_at.desc(), id.desc()))
            .first::<GoldRateDB>(&mut conn)
            .map(GoldRateRecord::from)
            .map_err(RateError::from)
    }

    /// Full history, newest first.
    pub fn history(&self) -> Result<Vec<GoldRateRecord>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        gold_rates
            .order((created_at.desc(), id.desc()))
            .load::<GoldRateDB>(&mut conn)
            .map(|rows| rows.into_iter().map(GoldRateRecord::from).collect())
            .map_err(RateError::from)
    }

    /// Number of history entries.
    pub fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        gold_rates
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(RateError::from)
    }
}
