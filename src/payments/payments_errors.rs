use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for payment-ledger operations
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Deposit not found: {0}")]
    DepositNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for PaymentError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => {
                PaymentError::DepositNotFound("Record not found".to_string())
            }
            _ => PaymentError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for payment operations
pub type Result<T> = std::result::Result<T, PaymentError>;
