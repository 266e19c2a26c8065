use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::customers_errors::{CustomerError, Result};

/// Domain model representing a customer.
///
/// `total_gold_weight` is derived from the deposit ledger: it is incremented
/// inside the deposit-creation transaction and removed with the customer.
/// It is never written through the update path.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub avatar: Option<String>,
    pub total_gold_weight: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub avatar: Option<String>,
}

impl NewCustomer {
    /// Validates the new customer data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CustomerError::InvalidData(
                "Customer name cannot be empty".to_string(),
            ));
        }
        if self.mobile.trim().is_empty() {
            return Err(CustomerError::InvalidData(
                "Customer mobile cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating an existing customer. Holds the editable fields
/// only; the derived gold weight is deliberately not representable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub avatar: Option<String>,
}

impl CustomerUpdate {
    /// Validates the customer update data
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CustomerError::InvalidData(
                "Customer ID is required for updates".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::InvalidData(
                "Customer name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for customers
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CustomerDB {
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub avatar: Option<String>,
    pub total_gold_weight: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<CustomerDB> for Customer {
    fn from(db: CustomerDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            mobile: db.mobile,
            address: db.address,
            avatar: db.avatar,
            total_gold_weight: db.total_gold_weight,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewCustomer> for CustomerDB {
    fn from(domain: NewCustomer) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: String::new(), // assigned by the repository at insert
            name: domain.name,
            mobile: domain.mobile,
            address: domain.address,
            avatar: domain.avatar,
            total_gold_weight: 0.0,
            created_at: now,
            updated_at: now,
        }
    }
}
