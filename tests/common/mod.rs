use std::sync::Arc;

use tempfile::TempDir;

use goldbook_core::customers::{CustomerService, CustomerServiceTrait, NewCustomer};
use goldbook_core::db;
use goldbook_core::deposits::DepositService;
use goldbook_core::payments::PaymentService;
use goldbook_core::rates::RateService;
use goldbook_core::reporting::ReportingService;

/// A fresh ledger backed by its own temporary database, torn down with the
/// temp dir at the end of the test.
pub struct TestLedger {
    _dir: TempDir,
    pub rates: Arc<RateService>,
    pub customers: Arc<CustomerService>,
    pub deposits: DepositService,
    pub payments: PaymentService,
    pub reporting: ReportingService,
}

pub fn setup() -> TestLedger {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let db_path = db::init(dir.path().to_str().unwrap()).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    let rates = Arc::new(RateService::new(pool.clone()));
    let customers = Arc::new(CustomerService::new(pool.clone()));

    TestLedger {
        _dir: dir,
        rates: rates.clone(),
        customers: customers.clone(),
        deposits: DepositService::new(pool.clone()),
        payments: PaymentService::new(pool.clone()),
        reporting: ReportingService::new(pool, rates, customers),
    }
}

pub async fn create_test_customer(ledger: &TestLedger, name: &str) -> String {
    let customer = ledger
        .customers
        .create_customer(NewCustomer {
            name: name.to_string(),
            mobile: "9876543210".to_string(),
            address: "12 Temple Street".to_string(),
            avatar: None,
        })
        .await
        .expect("Failed to create customer");
    customer.id
}
