use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use super::AccountNumber;

pub type CustomerId = Uuid;

/// Digits-only tax identifier, used as the customer lookup key.
///
/// Uniqueness is not enforced; when two customers share a tax ID the
/// directory resolves to whichever was registered first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(String);

impl TaxId {
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TaxIdError::Empty);
        }
        if !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(TaxIdError::NotDigits(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxIdError {
    #[error("tax ID must not be empty")]
    Empty,
    #[error("tax ID must contain only digits, got {0:?}")]
    NotDigits(String),
}

/// Legal identity of a customer. The single-level person hierarchy is
/// flattened into this kind field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerKind {
    /// A natural person identified by name and tax ID.
    Individual,
}

impl CustomerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerKind::Individual => "individual",
        }
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub kind: CustomerKind,
    pub name: String,
    pub tax_id: TaxId,
    pub address: String,
    /// Account numbers owned by this customer, in open order. Money-moving
    /// operations act on the first one.
    pub accounts: Vec<AccountNumber>,
}

impl Customer {
    pub fn new(name: impl Into<String>, address: impl Into<String>, tax_id: TaxId) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: CustomerKind::Individual,
            name: name.into(),
            tax_id,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// The account targeted by menu operations, if any.
    pub fn first_account(&self) -> Option<AccountNumber> {
        self.accounts.first().copied()
    }
}
