use serde::{Deserialize, Serialize};

use crate::customers::Customer;
use crate::deposits::Deposit;

/// Dashboard snapshot derived from the ledgers on every call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub current_rate: f64,
    pub customer_count: i64,
    pub deposit_count: i64,
    pub total_payments_collected: f64,
}

/// One customer's deposits and payment total, combined for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub customer: Customer,
    pub deposits: Vec<Deposit>,
    pub total_paid_across_deposits: f64,
}
