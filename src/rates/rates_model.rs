use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::rates_errors::{RateError, Result};

/// One entry of the append-only gold price history. The current rate is
/// always the price of the newest entry; there is no separately stored
/// "current rate" that could drift from the history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoldRateRecord {
    pub id: String,
    pub price_per_gram: f64,
    pub set_by: String,
    pub created_at: NaiveDateTime,
}

/// Input model for appending a rate entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoldRate {
    pub price_per_gram: f64,
    pub set_by: String,
}

impl NewGoldRate {
    /// Validates the rate before it is appended
    pub fn validate(&self) -> Result<()> {
        if !self.price_per_gram.is_finite() || self.price_per_gram <= 0.0 {
            return Err(RateError::InvalidRate(format!(
                "price per gram must be a positive number, got {}",
                self.price_per_gram
            )));
        }
        Ok(())
    }
}

/// Database model for gold rate entries
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::gold_rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoldRateDB {
    pub id: String,
    pub price_per_gram: f64,
    pub set_by: String,
    pub created_at: NaiveDateTime,
}

impl From<GoldRateDB> for GoldRateRecord {
    fn from(db: GoldRateDB) -> Self {
        Self {
            id: db.id,
            price_per_gram: db.price_per_gram,
            set_by: db.set_by,
            created_at: db.created_at,
        }
    }
}

impl From<NewGoldRate> for GoldRateDB {
    fn from(domain: NewGoldRate) -> Self {
        Self {
            id: String::new(), // assigned by the repository at insert
            price_per_gram: domain.price_per_gram,
            set_by: domain.set_by,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
