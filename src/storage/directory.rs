use std::collections::BTreeMap;

use crate::domain::{Account, AccountNumber, Customer, CustomerId, TaxId};

/// Process-lifetime store for every customer and account. Nothing here
/// survives exit; there is no persistence layer behind it.
#[derive(Debug)]
pub struct Directory {
    customers: Vec<Customer>,
    accounts: BTreeMap<AccountNumber, Account>,
    next_number: AccountNumber,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            accounts: BTreeMap::new(),
            next_number: 1,
        }
    }

    pub fn add_customer(&mut self, customer: Customer) -> CustomerId {
        let id = customer.id;
        self.customers.push(customer);
        id
    }

    /// Linear scan for the first customer with this tax ID. Duplicate tax
    /// IDs are permitted; later registrations are shadowed.
    pub fn find_customer(&self, tax_id: &TaxId) -> Option<&Customer> {
        self.customers.iter().find(|c| &c.tax_id == tax_id)
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Open a checking account for an existing customer, assigning the next
    /// monotonic account number. Returns None when the owner id is unknown,
    /// in which case no number is consumed.
    pub fn open_account(&mut self, owner: CustomerId) -> Option<AccountNumber> {
        let customer = self.customers.iter_mut().find(|c| c.id == owner)?;
        let number = self.next_number;
        self.next_number += 1;
        customer.add_account(number);
        self.accounts.insert(number, Account::open_checking(number, owner));
        Some(number)
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    /// All accounts in account-number order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
