use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::payments_errors::{PaymentError, Result};

/// Channel a payment was collected through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentChannel {
    Cash,
    ElectronicTransfer,
}

impl PaymentChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentChannel::Cash => "CASH",
            PaymentChannel::ElectronicTransfer => "ELECTRONIC_TRANSFER",
        }
    }
}

impl std::str::FromStr for PaymentChannel {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CASH" => Ok(PaymentChannel::Cash),
            "ELECTRONIC_TRANSFER" => Ok(PaymentChannel::ElectronicTransfer),
            other => Err(PaymentError::InvalidData(format!(
                "Unknown payment channel: {}",
                other
            ))),
        }
    }
}

/// Domain model representing a payment applied against a deposit.
/// Payments are immutable once created; there is no edit or reversal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub deposit_ref: String,
    pub customer_id: String,
    pub customer_name: String,
    pub amount: f64,
    pub channel: PaymentChannel,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub deposit_ref: String,
    pub customer_id: String,
    pub amount: f64,
    pub channel: PaymentChannel,
}

impl NewPayment {
    /// Validates the new payment data
    pub fn validate(&self) -> Result<()> {
        if self.deposit_ref.trim().is_empty() {
            return Err(PaymentError::InvalidData(
                "Deposit reference cannot be empty".to_string(),
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(PaymentError::InvalidAmount(format!(
                "payment amount must be a positive number, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Database model for payments
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentDB {
    pub id: String,
    pub deposit_ref: String,
    pub customer_id: String,
    pub customer_name: String,
    pub amount: f64,
    pub channel: String,
    pub created_at: NaiveDateTime,
}

impl From<PaymentDB> for Payment {
    fn from(db: PaymentDB) -> Self {
        Self {
            id: db.id,
            deposit_ref: db.deposit_ref,
            customer_id: db.customer_id,
            customer_name: db.customer_name,
            amount: db.amount,
            channel: db.channel.parse().unwrap_or(PaymentChannel::Cash),
            created_at: db.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_channel_round_trip() {
        for channel in [PaymentChannel::Cash, PaymentChannel::ElectronicTransfer] {
            assert_eq!(PaymentChannel::from_str(channel.as_str()).unwrap(), channel);
        }
        assert!(PaymentChannel::from_str("CHEQUE").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let valid = NewPayment {
            deposit_ref: "DEP-1-AAAA".to_string(),
            customer_id: "c1".to_string(),
            amount: 500.0,
            channel: PaymentChannel::Cash,
        };
        assert!(valid.validate().is_ok());

        let zero_amount = NewPayment {
            amount: 0.0,
            ..valid.clone()
        };
        assert!(matches!(
            zero_amount.validate(),
            Err(PaymentError::InvalidAmount(_))
        ));

        let no_ref = NewPayment {
            deposit_ref: String::new(),
            ..valid
        };
        assert!(matches!(
            no_ref.validate(),
            Err(PaymentError::InvalidData(_))
        ));
    }
}
