use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for deposit-ledger operations
#[derive(Debug, Error)]
pub enum DepositError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("No gold rate available: {0}")]
    RateUnavailable(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for DepositError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => DepositError::NotFound("Record not found".to_string()),
            _ => DepositError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for deposit operations
pub type Result<T> = std::result::Result<T, DepositError>;
