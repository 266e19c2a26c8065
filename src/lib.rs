pub mod db;

pub mod customers;
pub mod deposits;
pub mod payments;
pub mod rates;
pub mod reporting;

pub mod constants;
pub mod errors;
pub mod schema;

pub use errors::{Error, Result};
