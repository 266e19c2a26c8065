use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for gold-rate operations
#[derive(Debug, Error)]
pub enum RateError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Invalid rate: {0}")]
    InvalidRate(String),
    #[error("No gold rate has been set")]
    NoRateSet,
}

impl From<DieselError> for RateError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RateError::NoRateSet,
            _ => RateError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for rate operations
pub type Result<T> = std::result::Result<T, RateError>;
