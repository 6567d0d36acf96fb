//! Customer module
//!
//! A `Customer` owns its accounts in creation order. Account lookups are a
//! linear scan so the first account created under a duplicated number is
//! the one returned, and listings keep insertion order.

use crate::core::account::Account;
use crate::types::{AccountNumber, BankingError, CustomerId};
use rust_decimal::Decimal;
use std::fmt;
use tracing::{debug, info};

/// A named customer holding zero or more accounts
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Fixed at creation
    customer_id: CustomerId,
    name: String,
    accounts: Vec<Account>,
}

impl Customer {
    pub fn new(name: impl Into<String>, customer_id: impl Into<CustomerId>) -> Self {
        Customer {
            customer_id: customer_id.into(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Open a new account for this customer
    ///
    /// The initial balance is not validated and the number is not checked
    /// against existing accounts.
    pub fn create_account(
        &mut self,
        account_number: impl Into<AccountNumber>,
        initial_balance: Decimal,
    ) {
        let account = Account::new(account_number, initial_balance);
        info!(
            customer = %self.customer_id,
            account = account.account_number(),
            %initial_balance,
            "account created"
        );
        self.accounts.push(account);
    }

    /// Look up an account for mutation
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has the given number.
    pub fn get_account(&mut self, account_number: &str) -> Result<&mut Account, BankingError> {
        debug!(customer = %self.customer_id, account = account_number, "account lookup");
        self.accounts
            .iter_mut()
            .find(|account| account.account_number() == account_number)
            .ok_or_else(|| BankingError::account_not_found(account_number))
    }

    /// Look up an account for reading
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has the given number.
    pub fn account(&self, account_number: &str) -> Result<&Account, BankingError> {
        self.accounts
            .iter()
            .find(|account| account.account_number() == account_number)
            .ok_or_else(|| BankingError::account_not_found(account_number))
    }

    /// Rename the first account numbered `old_number` to `new_number`
    ///
    /// No collision check is made against the customer's other accounts.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has `old_number`.
    pub fn update_account_number(
        &mut self,
        old_number: &str,
        new_number: impl Into<AccountNumber>,
    ) -> Result<(), BankingError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.account_number() == old_number)
            .ok_or_else(|| BankingError::account_not_found(old_number))?;
        account.set_account_number(new_number);
        info!(
            customer = %self.customer_id,
            old = old_number,
            new = account.account_number(),
            "account renumbered"
        );
        Ok(())
    }

    /// Render the customer header followed by each account and its balance
    pub fn display_accounts(&self) -> AccountListing<'_> {
        AccountListing { customer: self }
    }
}

/// Display adapter listing a customer's accounts
#[derive(Debug, Clone, Copy)]
pub struct AccountListing<'a> {
    customer: &'a Customer,
}

impl fmt::Display for AccountListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Customer: {} | Customer ID: {}",
            self.customer.name, self.customer.customer_id
        )?;
        for account in &self.customer.accounts {
            writeln!(
                f,
                "Account Number: {} | Balance: {}",
                account.account_number(),
                account.balance().normalize()
            )?;
        }
        Ok(())
    }
}
