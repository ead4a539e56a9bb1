use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::{
    AccountNumber, Cents, Customer, TaxId, Transaction, TransactionKind, TransactionRecord,
    DAILY_TRANSACTION_LIMIT,
};
use crate::storage::Directory;

use super::AppError;

/// Application service providing the teller operations. This is the primary
/// interface for any client (the menu loop, tests).
pub struct TellerService {
    directory: Directory,
}

/// Outcome of a successful deposit or withdrawal.
pub struct Receipt {
    pub account_number: AccountNumber,
    pub kind: TransactionKind,
    pub amount_cents: Cents,
    pub balance_cents: Cents,
}

/// Snapshot of one account's history plus its current balance.
pub struct Statement {
    pub account_number: AccountNumber,
    pub balance_cents: Cents,
    pub records: Vec<TransactionRecord>,
}

/// One row of the account listing.
pub struct AccountSummary {
    pub number: AccountNumber,
    pub balance_cents: Cents,
    pub overdraft_limit_cents: Cents,
    pub customer_name: String,
}

impl TellerService {
    pub fn new() -> Self {
        Self {
            directory: Directory::new(),
        }
    }

    // ========================
    // Customer operations
    // ========================

    /// Register a new customer. Duplicate tax IDs are permitted; lookups
    /// resolve to the earliest registration.
    pub fn create_customer(
        &mut self,
        name: &str,
        address: &str,
        tax_id: &str,
    ) -> Result<Customer, AppError> {
        let tax_id = TaxId::parse(tax_id)?;
        let customer = Customer::new(name, address, tax_id);
        info!(name = %customer.name, tax_id = %customer.tax_id, "customer created");

        let registered = customer.clone();
        self.directory.add_customer(customer);
        Ok(registered)
    }

    /// Open a checking account for the customer with this tax ID.
    pub fn open_account(&mut self, tax_id: &str) -> Result<AccountNumber, AppError> {
        let tax_id = TaxId::parse(tax_id)?;
        let owner = self
            .directory
            .find_customer(&tax_id)
            .ok_or_else(|| AppError::CustomerNotFound(tax_id.to_string()))?
            .id;

        let number = self
            .directory
            .open_account(owner)
            .ok_or(AppError::CustomerRecordMissing)?;
        info!(account = number, "account opened");
        Ok(number)
    }

    // ========================
    // Transaction operations
    // ========================

    pub fn deposit(
        &mut self,
        tax_id: &str,
        amount_cents: Cents,
        at: DateTime<Utc>,
    ) -> Result<Receipt, AppError> {
        self.perform(tax_id, TransactionKind::Deposit, amount_cents, at)
    }

    pub fn withdraw(
        &mut self,
        tax_id: &str,
        amount_cents: Cents,
        at: DateTime<Utc>,
    ) -> Result<Receipt, AppError> {
        self.perform(tax_id, TransactionKind::Withdrawal, amount_cents, at)
    }

    /// Shared deposit/withdraw path: resolve the customer's current account,
    /// enforce the daily limit, then apply. The limit check runs before the
    /// balance check, so a 4th attempt on a drained account still reports
    /// the limit.
    fn perform(
        &mut self,
        tax_id: &str,
        kind: TransactionKind,
        amount_cents: Cents,
        at: DateTime<Utc>,
    ) -> Result<Receipt, AppError> {
        if amount_cents <= 0 {
            return Err(AppError::InvalidAmount(
                "amount must be positive".to_string(),
            ));
        }

        let tax_id = TaxId::parse(tax_id)?;
        let number = self.current_account(&tax_id)?;
        let account = self
            .directory
            .account_mut(number)
            .ok_or(AppError::AccountNotFound(number))?;

        let today = at.date_naive();
        if account.history.count_on(today) >= DAILY_TRANSACTION_LIMIT {
            warn!(account = number, %kind, "daily transaction limit reached");
            return Err(AppError::DailyLimitExceeded {
                account: number,
                limit: DAILY_TRANSACTION_LIMIT,
            });
        }

        Transaction::new(kind, amount_cents).apply(account, at)?;

        let balance_cents = account.balance_cents();
        info!(account = number, %kind, amount = amount_cents, "transaction recorded");
        Ok(Receipt {
            account_number: number,
            kind,
            amount_cents,
            balance_cents,
        })
    }

    // ========================
    // Query operations
    // ========================

    /// Statement for the customer's current account, optionally filtered to
    /// a single transaction kind. Records come back in insertion order.
    pub fn statement(
        &self,
        tax_id: &str,
        filter: Option<TransactionKind>,
    ) -> Result<Statement, AppError> {
        let tax_id = TaxId::parse(tax_id)?;
        let number = self.current_account(&tax_id)?;
        let account = self
            .directory
            .account(number)
            .ok_or(AppError::AccountNotFound(number))?;

        Ok(Statement {
            account_number: number,
            balance_cents: account.balance_cents(),
            records: account.history.report(filter).cloned().collect(),
        })
    }

    /// Every open account with its owner's name, in account-number order.
    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        self.directory
            .accounts()
            .map(|account| AccountSummary {
                number: account.number,
                balance_cents: account.balance_cents(),
                overdraft_limit_cents: account.overdraft_limit_cents,
                customer_name: self
                    .directory
                    .customer(account.owner)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "(unknown)".to_string()),
            })
            .collect()
    }

    /// The first account owned by the customer with this tax ID. There is no
    /// account selection; menu operations always act on the first one.
    fn current_account(&self, tax_id: &TaxId) -> Result<AccountNumber, AppError> {
        let customer = self
            .directory
            .find_customer(tax_id)
            .ok_or_else(|| AppError::CustomerNotFound(tax_id.to_string()))?;

        customer
            .first_account()
            .ok_or_else(|| AppError::NoAccount(customer.name.clone()))
    }
}

impl Default for TellerService {
    fn default() -> Self {
        Self::new()
    }
}
