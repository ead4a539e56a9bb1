use thiserror::Error;

use crate::domain::{AccountNumber, TaxIdError, TransactionError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid tax ID: {0}")]
    InvalidTaxId(#[from] TaxIdError),

    #[error("customer not found: {0}")]
    CustomerNotFound(String),

    #[error("customer {0} has no accounts")]
    NoAccount(String),

    #[error("daily limit of {limit} transactions reached for account {account}")]
    DailyLimitExceeded {
        account: AccountNumber,
        limit: usize,
    },

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    // Directory inconsistencies: a stored key that resolves to nothing.
    #[error("account not found: {0}")]
    AccountNotFound(AccountNumber),

    #[error("customer record missing from the directory")]
    CustomerRecordMissing,
}
