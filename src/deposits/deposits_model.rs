use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::deposits_errors::{DepositError, Result};
use crate::constants::GOLD_WEIGHT_DISPLAY_DECIMALS;

/// Lifecycle status of a deposit. Deposits are created `Active`; no
/// transition to `Completed` is wired up yet, the column is the extension
/// point for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositStatus {
    #[default]
    Active,
    Completed,
}

impl DepositStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositStatus::Active => "ACTIVE",
            DepositStatus::Completed => "COMPLETED",
        }
    }
}

impl std::str::FromStr for DepositStatus {
    type Err = DepositError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ACTIVE" => Ok(DepositStatus::Active),
            "COMPLETED" => Ok(DepositStatus::Completed),
            other => Err(DepositError::InvalidData(format!(
                "Unknown deposit status: {}",
                other
            ))),
        }
    }
}

/// Domain model representing a deposit.
///
/// `gold_weight` and `gold_rate_at_deposit` are frozen at creation time and
/// never change afterwards, no matter how the rate register moves on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub id: String,
    /// Human-readable, time-ordered reference, e.g. `DEP-1752307200123-8KQZ`.
    pub deposit_ref: String,
    pub customer_id: String,
    pub customer_name: String,
    pub amount: f64,
    pub gold_weight: f64,
    pub gold_rate_at_deposit: f64,
    pub status: DepositStatus,
    pub created_at: NaiveDateTime,
}

impl Deposit {
    /// Gold weight rounded for presentation. The stored value keeps full
    /// double precision.
    pub fn gold_weight_display(&self) -> f64 {
        let factor = 10f64.powi(GOLD_WEIGHT_DISPLAY_DECIMALS as i32);
        (self.gold_weight * factor).round() / factor
    }
}

/// Input model for creating a new deposit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeposit {
    pub customer_id: String,
    pub amount: f64,
}

impl NewDeposit {
    /// Validates the new deposit data
    pub fn validate(&self) -> Result<()> {
        if self.customer_id.trim().is_empty() {
            return Err(DepositError::InvalidData(
                "Customer ID cannot be empty".to_string(),
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(DepositError::InvalidAmount(format!(
                "deposit amount must be a positive number, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Database model for deposits
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::deposits)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DepositDB {
    pub id: String,
    pub deposit_ref: String,
    pub customer_id: String,
    pub customer_name: String,
    pub amount: f64,
    pub gold_weight: f64,
    pub gold_rate_at_deposit: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<DepositDB> for Deposit {
    fn from(db: DepositDB) -> Self {
        Self {
            id: db.id,
            deposit_ref: db.deposit_ref,
            customer_id: db.customer_id,
            customer_name: db.customer_name,
            amount: db.amount,
            gold_weight: db.gold_weight,
            gold_rate_at_deposit: db.gold_rate_at_deposit,
            status: db.status.parse().unwrap_or_default(),
            created_at: db.created_at,
        }
    }
}
