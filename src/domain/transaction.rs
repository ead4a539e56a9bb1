use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::{Account, Cents, TransactionRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }

    /// Case-insensitive match against the display name, for operator input.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(TransactionKind::Deposit),
            "withdrawal" => Some(TransactionKind::Withdrawal),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single money movement against one account. Immutable value; the amount
/// is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount_cents: Cents,
}

impl Transaction {
    pub fn deposit(amount_cents: Cents) -> Self {
        Self::new(TransactionKind::Deposit, amount_cents)
    }

    pub fn withdrawal(amount_cents: Cents) -> Self {
        Self::new(TransactionKind::Withdrawal, amount_cents)
    }

    pub fn new(kind: TransactionKind, amount_cents: Cents) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self { kind, amount_cents }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount_cents(&self) -> Cents {
        self.amount_cents
    }

    /// Apply this transaction to an account.
    ///
    /// Deposits always succeed. Withdrawals require `balance >= amount`; the
    /// overdraft limit is not consulted. On success the balance moves and
    /// exactly one record stamped `at` is appended to the account history;
    /// on failure nothing changes.
    pub fn apply(
        &self,
        account: &mut Account,
        at: DateTime<Utc>,
    ) -> Result<TransactionRecord, TransactionError> {
        match self.kind {
            TransactionKind::Deposit => account.credit(self.amount_cents),
            TransactionKind::Withdrawal => {
                if account.balance_cents() < self.amount_cents {
                    return Err(TransactionError::InsufficientFunds {
                        balance: account.balance_cents(),
                        requested: self.amount_cents,
                    });
                }
                account.debit(self.amount_cents);
            }
        }
        Ok(account.history.append(self.kind, self.amount_cents, at))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("insufficient funds: balance {balance} cents, requested {requested} cents")]
    InsufficientFunds { balance: Cents, requested: Cents },
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn test_account() -> Account {
        Account::open_checking(1, Uuid::new_v4())
    }

    #[test]
    fn test_deposit_credits_and_records() {
        let mut account = test_account();
        let record = Transaction::deposit(10000)
            .apply(&mut account, Utc::now())
            .unwrap();

        assert_eq!(account.balance_cents(), 10000);
        assert_eq!(record.kind, TransactionKind::Deposit);
        assert_eq!(record.amount_cents, 10000);
        assert_eq!(account.history.records().len(), 1);
    }

    #[test]
    fn test_withdrawal_debits_within_balance() {
        let mut account = test_account();
        Transaction::deposit(10000)
            .apply(&mut account, Utc::now())
            .unwrap();
        Transaction::withdrawal(3000)
            .apply(&mut account, Utc::now())
            .unwrap();

        assert_eq!(account.balance_cents(), 7000);
        assert_eq!(account.history.records().len(), 2);
    }

    #[test]
    fn test_withdrawal_beyond_balance_changes_nothing() {
        let mut account = test_account();
        Transaction::deposit(2000)
            .apply(&mut account, Utc::now())
            .unwrap();

        let result = Transaction::withdrawal(5000).apply(&mut account, Utc::now());

        assert_eq!(
            result,
            Err(TransactionError::InsufficientFunds {
                balance: 2000,
                requested: 5000,
            })
        );
        assert_eq!(account.balance_cents(), 2000);
        assert_eq!(account.history.records().len(), 1);
    }

    #[test]
    fn test_overdraft_limit_is_not_consulted() {
        // The account advertises an overdraft limit, but withdrawals still
        // use the strict balance check.
        let mut account = test_account();
        assert!(account.overdraft_limit_cents > 0);

        let result = Transaction::withdrawal(1).apply(&mut account, Utc::now());
        assert!(result.is_err());
    }

    #[test]
    #[should_panic(expected = "Transaction amount must be positive")]
    fn test_transaction_requires_positive_amount() {
        Transaction::deposit(0);
    }

    #[test]
    fn test_kind_from_str_is_case_insensitive() {
        assert_eq!(
            TransactionKind::from_str("Deposit"),
            Some(TransactionKind::Deposit)
        );
        assert_eq!(
            TransactionKind::from_str("WITHDRAWAL"),
            Some(TransactionKind::Withdrawal)
        );
        assert_eq!(TransactionKind::from_str("transfer"), None);
    }
}
