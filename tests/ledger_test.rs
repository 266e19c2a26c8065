use goldbook_core::constants::{DEFAULT_RATE_PER_GRAM, SEED_RATE_SET_BY};
use goldbook_core::customers::{CustomerError, CustomerServiceTrait, CustomerUpdate};
use goldbook_core::deposits::{DepositError, DepositServiceTrait, DepositStatus, NewDeposit};
use goldbook_core::payments::{NewPayment, PaymentChannel, PaymentError, PaymentServiceTrait};
use goldbook_core::rates::{NewGoldRate, RateError, RateServiceTrait};
use goldbook_core::reporting::ReportingServiceTrait;

mod common;

fn admin_rate(price_per_gram: f64) -> NewGoldRate {
    NewGoldRate {
        price_per_gram,
        set_by: "admin".to_string(),
    }
}

#[tokio::test]
async fn test_deposit_freezes_rate_at_creation() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;

    ledger.rates.set_rate(admin_rate(7500.0)).await.unwrap();

    let deposit = ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id: customer_id.clone(),
            amount: 15000.0,
        })
        .await
        .unwrap();

    assert_eq!(deposit.gold_weight, 2.0);
    assert_eq!(deposit.gold_rate_at_deposit, 7500.0);
    assert_eq!(deposit.status, DepositStatus::Active);

    // A later rate change must not touch the stored deposit.
    ledger.rates.set_rate(admin_rate(8000.0)).await.unwrap();
    assert_eq!(ledger.rates.current_rate().unwrap(), 8000.0);

    let refetched = ledger
        .deposits
        .find_by_reference(&deposit.deposit_ref)
        .unwrap();
    assert_eq!(refetched.gold_weight, 2.0);
    assert_eq!(refetched.gold_rate_at_deposit, 7500.0);
}

#[tokio::test]
async fn test_customer_total_tracks_deposits() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;

    ledger.rates.set_rate(admin_rate(5000.0)).await.unwrap();

    for amount in [5000.0, 10000.0] {
        ledger
            .deposits
            .create_deposit(NewDeposit {
                customer_id: customer_id.clone(),
                amount,
            })
            .await
            .unwrap();
    }

    let customer = ledger.customers.get_customer(&customer_id).unwrap();
    assert_eq!(customer.total_gold_weight, 3.0);

    // Reconciliation: the running total must equal the recomputed sum.
    let recomputed: f64 = ledger
        .deposits
        .get_deposits_by_customer(&customer_id)
        .unwrap()
        .iter()
        .map(|d| d.gold_weight)
        .sum();
    assert_eq!(customer.total_gold_weight, recomputed);
}

#[tokio::test]
async fn test_payments_roll_up_into_totals() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;

    ledger.rates.set_rate(admin_rate(7500.0)).await.unwrap();
    let deposit = ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id: customer_id.clone(),
            amount: 15000.0,
        })
        .await
        .unwrap();

    for (amount, channel) in [
        (3000.0, PaymentChannel::Cash),
        (4000.0, PaymentChannel::ElectronicTransfer),
    ] {
        ledger
            .payments
            .create_payment(NewPayment {
                deposit_ref: deposit.deposit_ref.clone(),
                customer_id: customer_id.clone(),
                amount,
                channel,
            })
            .await
            .unwrap();
    }

    assert_eq!(
        ledger.payments.total_for_deposit(&deposit.deposit_ref).unwrap(),
        7000.0
    );
    assert_eq!(
        ledger
            .payments
            .get_payments_by_deposit(&deposit.deposit_ref)
            .unwrap()
            .len(),
        2
    );

    let stats = ledger.reporting.dashboard_stats().unwrap();
    assert_eq!(stats.total_payments_collected, 7000.0);
}

#[tokio::test]
async fn test_cascade_delete_removes_deposits_and_payments() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;
    let other_id = common::create_test_customer(&ledger, "Bina").await;

    ledger.rates.set_rate(admin_rate(5000.0)).await.unwrap();

    let deposit = ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id: customer_id.clone(),
            amount: 5000.0,
        })
        .await
        .unwrap();
    ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id: other_id.clone(),
            amount: 2500.0,
        })
        .await
        .unwrap();
    ledger
        .payments
        .create_payment(NewPayment {
            deposit_ref: deposit.deposit_ref.clone(),
            customer_id: customer_id.clone(),
            amount: 1000.0,
            channel: PaymentChannel::Cash,
        })
        .await
        .unwrap();

    let before = ledger.reporting.dashboard_stats().unwrap();
    assert_eq!(before.customer_count, 2);
    assert_eq!(before.deposit_count, 2);
    assert_eq!(before.total_payments_collected, 1000.0);

    ledger.customers.delete_customer(&customer_id).await.unwrap();

    assert!(ledger
        .deposits
        .get_deposits_by_customer(&customer_id)
        .unwrap()
        .is_empty());
    assert!(ledger
        .payments
        .get_payments_by_deposit(&deposit.deposit_ref)
        .unwrap()
        .is_empty());

    // The other customer's ledger entries survive the cascade.
    let after = ledger.reporting.dashboard_stats().unwrap();
    assert_eq!(after.customer_count, 1);
    assert_eq!(after.deposit_count, 1);
    assert_eq!(after.total_payments_collected, 0.0);
}

#[tokio::test]
async fn test_deposit_references_are_unique_in_rapid_succession() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;

    ledger.rates.set_rate(admin_rate(7500.0)).await.unwrap();

    let mut references = std::collections::HashSet::new();
    for _ in 0..50 {
        let deposit = ledger
            .deposits
            .create_deposit(NewDeposit {
                customer_id: customer_id.clone(),
                amount: 100.0,
            })
            .await
            .unwrap();
        assert!(deposit.deposit_ref.starts_with("DEP-"));
        assert_ne!(deposit.deposit_ref, deposit.id);
        references.insert(deposit.deposit_ref);
    }

    assert_eq!(references.len(), 50);
}

#[tokio::test]
async fn test_dashboard_stats_is_idempotent() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;

    ledger.rates.set_rate(admin_rate(7500.0)).await.unwrap();
    ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id,
            amount: 15000.0,
        })
        .await
        .unwrap();

    let first = ledger.reporting.dashboard_stats().unwrap();
    let second = ledger.reporting.dashboard_stats().unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_rate_history_is_newest_first() {
    let ledger = common::setup();

    for price in [7000.0, 7500.0, 8000.0] {
        ledger.rates.set_rate(admin_rate(price)).await.unwrap();
    }

    let history = ledger.rates.history().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].price_per_gram, 8000.0);
    assert_eq!(history[2].price_per_gram, 7000.0);

    // The current rate is the newest history entry, nothing else.
    assert_eq!(ledger.rates.current_rate().unwrap(), 8000.0);
}

#[tokio::test]
async fn test_default_rate_seeding() {
    let ledger = common::setup();

    assert!(matches!(
        ledger.rates.current_rate(),
        Err(RateError::NoRateSet)
    ));

    ledger
        .rates
        .ensure_default_rate(DEFAULT_RATE_PER_GRAM)
        .await
        .unwrap();
    assert_eq!(ledger.rates.current_rate().unwrap(), DEFAULT_RATE_PER_GRAM);
    assert_eq!(ledger.rates.history().unwrap()[0].set_by, SEED_RATE_SET_BY);

    // Seeding is a no-op once the history is non-empty.
    ledger.rates.set_rate(admin_rate(8000.0)).await.unwrap();
    ledger
        .rates
        .ensure_default_rate(DEFAULT_RATE_PER_GRAM)
        .await
        .unwrap();
    assert_eq!(ledger.rates.history().unwrap().len(), 2);
    assert_eq!(ledger.rates.current_rate().unwrap(), 8000.0);
}

#[tokio::test]
async fn test_validation_failures_leave_no_trace() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;

    assert!(matches!(
        ledger.rates.set_rate(admin_rate(0.0)).await,
        Err(RateError::InvalidRate(_))
    ));

    ledger.rates.set_rate(admin_rate(7500.0)).await.unwrap();

    assert!(matches!(
        ledger
            .deposits
            .create_deposit(NewDeposit {
                customer_id: customer_id.clone(),
                amount: -100.0,
            })
            .await,
        Err(DepositError::InvalidAmount(_))
    ));
    assert!(matches!(
        ledger
            .deposits
            .create_deposit(NewDeposit {
                customer_id: "missing".to_string(),
                amount: 100.0,
            })
            .await,
        Err(DepositError::CustomerNotFound(_))
    ));
    assert!(matches!(
        ledger
            .payments
            .create_payment(NewPayment {
                deposit_ref: "DEP-0-XXXX".to_string(),
                customer_id: customer_id.clone(),
                amount: 100.0,
                channel: PaymentChannel::Cash,
            })
            .await,
        Err(PaymentError::DepositNotFound(_))
    ));

    // None of the failed operations may have written anything.
    let stats = ledger.reporting.dashboard_stats().unwrap();
    assert_eq!(stats.deposit_count, 0);
    assert_eq!(stats.total_payments_collected, 0.0);
    let customer = ledger.customers.get_customer(&customer_id).unwrap();
    assert_eq!(customer.total_gold_weight, 0.0);
}

#[tokio::test]
async fn test_unknown_customer_update_and_delete() {
    let ledger = common::setup();

    assert!(matches!(
        ledger
            .customers
            .update_customer(CustomerUpdate {
                id: "missing".to_string(),
                name: "Nobody".to_string(),
                mobile: "0".to_string(),
                address: String::new(),
                avatar: None,
            })
            .await,
        Err(CustomerError::NotFound(_))
    ));
    assert!(matches!(
        ledger.customers.delete_customer("missing").await,
        Err(CustomerError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_customer_update_keeps_derived_weight() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;

    ledger.rates.set_rate(admin_rate(5000.0)).await.unwrap();
    ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id: customer_id.clone(),
            amount: 5000.0,
        })
        .await
        .unwrap();

    let updated = ledger
        .customers
        .update_customer(CustomerUpdate {
            id: customer_id.clone(),
            name: "Asha Rao".to_string(),
            mobile: "9000000000".to_string(),
            address: "14 Temple Street".to_string(),
            avatar: Some("avatar.png".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Asha Rao");
    assert_eq!(updated.total_gold_weight, 1.0);
}

#[tokio::test]
async fn test_over_payment_is_accepted() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;

    ledger.rates.set_rate(admin_rate(7500.0)).await.unwrap();
    let deposit = ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id: customer_id.clone(),
            amount: 1000.0,
        })
        .await
        .unwrap();

    // Payments may exceed the deposit's principal; no cap is enforced.
    ledger
        .payments
        .create_payment(NewPayment {
            deposit_ref: deposit.deposit_ref.clone(),
            customer_id,
            amount: 5000.0,
            channel: PaymentChannel::ElectronicTransfer,
        })
        .await
        .unwrap();

    assert_eq!(
        ledger.payments.total_for_deposit(&deposit.deposit_ref).unwrap(),
        5000.0
    );
}

#[tokio::test]
async fn test_payment_rejects_mismatched_customer() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;
    let other_id = common::create_test_customer(&ledger, "Bina").await;

    ledger.rates.set_rate(admin_rate(7500.0)).await.unwrap();
    let deposit = ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id,
            amount: 1000.0,
        })
        .await
        .unwrap();

    assert!(matches!(
        ledger
            .payments
            .create_payment(NewPayment {
                deposit_ref: deposit.deposit_ref,
                customer_id: other_id,
                amount: 100.0,
                channel: PaymentChannel::Cash,
            })
            .await,
        Err(PaymentError::InvalidData(_))
    ));
}

#[tokio::test]
async fn test_customer_profile_combines_ledgers() {
    let ledger = common::setup();
    let customer_id = common::create_test_customer(&ledger, "Asha").await;
    let other_id = common::create_test_customer(&ledger, "Bina").await;

    ledger.rates.set_rate(admin_rate(5000.0)).await.unwrap();

    let deposit_a = ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id: customer_id.clone(),
            amount: 5000.0,
        })
        .await
        .unwrap();
    let deposit_b = ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id: customer_id.clone(),
            amount: 10000.0,
        })
        .await
        .unwrap();
    let other_deposit = ledger
        .deposits
        .create_deposit(NewDeposit {
            customer_id: other_id.clone(),
            amount: 2500.0,
        })
        .await
        .unwrap();

    for (deposit_ref, customer, amount) in [
        (&deposit_a.deposit_ref, &customer_id, 2000.0),
        (&deposit_b.deposit_ref, &customer_id, 3000.0),
        (&other_deposit.deposit_ref, &other_id, 500.0),
    ] {
        ledger
            .payments
            .create_payment(NewPayment {
                deposit_ref: deposit_ref.clone(),
                customer_id: customer.clone(),
                amount,
                channel: PaymentChannel::Cash,
            })
            .await
            .unwrap();
    }

    let profile = ledger.reporting.customer_profile(&customer_id).unwrap();
    assert_eq!(profile.customer.id, customer_id);
    assert_eq!(profile.deposits.len(), 2);
    assert_eq!(profile.total_paid_across_deposits, 5000.0);
    assert_eq!(profile.customer.total_gold_weight, 3.0);
}
