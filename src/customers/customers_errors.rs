use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for customer-related operations
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for CustomerError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => CustomerError::NotFound("Record not found".to_string()),
            _ => CustomerError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for customer operations
pub type Result<T> = std::result::Result<T, CustomerError>;
