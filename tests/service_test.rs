mod common;

use common::{at, service_with_account, TAX_ID};
use teller::application::{AppError, TellerService};
use teller::domain::{TransactionKind, DEFAULT_OVERDRAFT_LIMIT};

#[test]
fn test_open_accounts_assigns_monotonic_numbers() {
    let mut service = TellerService::new();
    service.create_customer("Ana", "1 Main St", "111").unwrap();
    service.create_customer("Bia", "2 Main St", "222").unwrap();

    assert_eq!(service.open_account("111").unwrap(), 1);
    assert_eq!(service.open_account("222").unwrap(), 2);
    assert_eq!(service.open_account("111").unwrap(), 3);
}

#[test]
fn test_open_account_unknown_tax_id_creates_nothing() {
    let mut service = TellerService::new();

    let result = service.open_account("999");
    assert!(matches!(result, Err(AppError::CustomerNotFound(_))));
    assert!(service.list_accounts().is_empty());

    // The failed open must not have consumed an account number
    service.create_customer("Ana", "1 Main St", "123").unwrap();
    assert_eq!(service.open_account("123").unwrap(), 1);
}

#[test]
fn test_malformed_tax_id_is_rejected_everywhere() {
    let mut service = TellerService::new();

    assert!(matches!(
        service.create_customer("Ana", "1 Main St", "12a45"),
        Err(AppError::InvalidTaxId(_))
    ));
    assert!(matches!(
        service.open_account("12-345"),
        Err(AppError::InvalidTaxId(_))
    ));
    assert!(matches!(
        service.deposit("cpf", 1000, at("2026-08-06", 9)),
        Err(AppError::InvalidTaxId(_))
    ));
}

#[test]
fn test_deposit_then_withdraw_scenario() {
    let mut service = TellerService::new();
    service.create_customer("Ana", "1 Main St", "123").unwrap();
    service.open_account("123").unwrap();

    service.deposit("123", 10000, at("2026-08-06", 9)).unwrap();
    let receipt = service.withdraw("123", 3000, at("2026-08-06", 10)).unwrap();
    assert_eq!(receipt.balance_cents, 7000);

    let statement = service.statement("123", None).unwrap();
    assert_eq!(statement.balance_cents, 7000);

    let movements: Vec<_> = statement
        .records
        .iter()
        .map(|r| (r.kind, r.amount_cents))
        .collect();
    assert_eq!(
        movements,
        vec![
            (TransactionKind::Deposit, 10000),
            (TransactionKind::Withdrawal, 3000),
        ]
    );
}

#[test]
fn test_balance_is_sum_of_recorded_movements() {
    let mut service = service_with_account();

    service.deposit(TAX_ID, 5000, at("2026-08-06", 9)).unwrap();
    service.deposit(TAX_ID, 2500, at("2026-08-06", 10)).unwrap();
    service.withdraw(TAX_ID, 1000, at("2026-08-06", 11)).unwrap();

    // Next day so the failed attempt is judged on funds, not the daily limit
    let result = service.withdraw(TAX_ID, 100000, at("2026-08-07", 9));
    assert!(matches!(result, Err(AppError::Transaction(_))));

    let statement = service.statement(TAX_ID, None).unwrap();
    assert_eq!(statement.balance_cents, 5000 + 2500 - 1000);
    assert_eq!(statement.records.len(), 3);
}

#[test]
fn test_withdrawal_beyond_balance_changes_nothing() {
    let mut service = service_with_account();
    service.deposit(TAX_ID, 2000, at("2026-08-06", 9)).unwrap();

    let result = service.withdraw(TAX_ID, 5000, at("2026-08-06", 10));
    assert!(matches!(result, Err(AppError::Transaction(_))));

    let statement = service.statement(TAX_ID, None).unwrap();
    assert_eq!(statement.balance_cents, 2000);
    assert_eq!(statement.records.len(), 1);
}

#[test]
fn test_customer_without_account() {
    let mut service = TellerService::new();
    service.create_customer("Ana", "1 Main St", "123").unwrap();

    assert!(matches!(
        service.deposit("123", 1000, at("2026-08-06", 9)),
        Err(AppError::NoAccount(_))
    ));
    assert!(matches!(
        service.statement("123", None),
        Err(AppError::NoAccount(_))
    ));
}

#[test]
fn test_non_positive_amounts_are_rejected() {
    let mut service = service_with_account();

    assert!(matches!(
        service.deposit(TAX_ID, 0, at("2026-08-06", 9)),
        Err(AppError::InvalidAmount(_))
    ));
    assert!(matches!(
        service.withdraw(TAX_ID, -500, at("2026-08-06", 9)),
        Err(AppError::InvalidAmount(_))
    ));

    let statement = service.statement(TAX_ID, None).unwrap();
    assert!(statement.records.is_empty());
}

#[test]
fn test_list_accounts_joins_owner_names() {
    let mut service = TellerService::new();
    service.create_customer("Ana", "1 Main St", "111").unwrap();
    service.create_customer("Bia", "2 Main St", "222").unwrap();
    service.open_account("111").unwrap();
    service.open_account("222").unwrap();
    service.deposit("222", 1500, at("2026-08-06", 9)).unwrap();

    let accounts = service.list_accounts();
    assert_eq!(accounts.len(), 2);

    assert_eq!(accounts[0].number, 1);
    assert_eq!(accounts[0].customer_name, "Ana");
    assert_eq!(accounts[0].balance_cents, 0);
    assert_eq!(accounts[0].overdraft_limit_cents, DEFAULT_OVERDRAFT_LIMIT);

    assert_eq!(accounts[1].number, 2);
    assert_eq!(accounts[1].customer_name, "Bia");
    assert_eq!(accounts[1].balance_cents, 1500);
}

#[test]
fn test_duplicate_tax_ids_route_to_first_registration() {
    let mut service = TellerService::new();
    service.create_customer("First", "1 Main St", "999").unwrap();
    service.create_customer("Second", "2 Main St", "999").unwrap();
    service.open_account("999").unwrap();
    service.deposit("999", 1000, at("2026-08-06", 9)).unwrap();

    let accounts = service.list_accounts();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].customer_name, "First");
    assert_eq!(accounts[0].balance_cents, 1000);
}
