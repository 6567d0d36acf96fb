//! Account ledger module
//!
//! This module provides the `Account` struct which owns a balance and the
//! append-only history of transactions that produced it.
//!
//! The Account is responsible for:
//! - Validating deposit and withdrawal amounts
//! - Keeping `balance == initial + deposits - withdrawals`
//! - Recording one transaction per successful balance change
//! - Rendering its transaction history for display

use crate::types::{AccountNumber, BankingError, Transaction, TransactionType};
use rust_decimal::Decimal;
use std::fmt;
use tracing::info;

/// A balance-bearing ledger identified by a mutable account number
///
/// The initial balance is taken as given, negative or zero included. Every
/// failed operation leaves both the balance and the history unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Identifier, replaceable through `set_account_number`
    account_number: AccountNumber,

    /// Current balance
    balance: Decimal,

    /// Transactions in the order they were applied
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create a new account with an empty history
    ///
    /// # Arguments
    ///
    /// * `account_number` - Identifier for the account
    /// * `initial_balance` - Opening balance (not validated)
    pub fn new(account_number: impl Into<AccountNumber>, initial_balance: Decimal) -> Self {
        Account {
            account_number: account_number.into(),
            balance: initial_balance,
            transactions: Vec::new(),
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Replace the account number
    ///
    /// No uniqueness or format check is applied.
    pub fn set_account_number(&mut self, account_number: impl Into<AccountNumber>) {
        self.account_number = account_number.into();
    }

    /// Deposit funds into the account
    ///
    /// Increases the balance by `amount` and appends a Deposit transaction.
    /// Uses checked arithmetic so the balance never wraps or panics.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`InvalidArgument`)
    /// - Adding `amount` to the balance would overflow (`ArithmeticOverflow`)
    /// - The exact sum would have to be rounded (`PrecisionLoss`)
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankingError> {
        if amount <= Decimal::ZERO {
            return Err(BankingError::invalid_argument(
                TransactionType::Deposit,
                amount,
            ));
        }

        let new_balance = self.balance.checked_add(amount).ok_or_else(|| {
            BankingError::arithmetic_overflow(TransactionType::Deposit, &self.account_number)
        })?;
        if was_rounded(new_balance, self.balance, amount) {
            return Err(BankingError::precision_loss(
                TransactionType::Deposit,
                &self.account_number,
            ));
        }

        self.balance = new_balance;
        self.transactions
            .push(Transaction::new(TransactionType::Deposit, amount));

        info!(account = %self.account_number, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// Decreases the balance by `amount` and appends a Withdrawal transaction.
    /// The sign check runs before the balance check.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`InvalidArgument`)
    /// - `amount` exceeds the current balance (`InsufficientFunds`)
    /// - Subtracting would leave the decimal range (`ArithmeticOverflow`)
    /// - The exact difference would have to be rounded (`PrecisionLoss`)
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankingError> {
        if amount <= Decimal::ZERO {
            return Err(BankingError::invalid_argument(
                TransactionType::Withdrawal,
                amount,
            ));
        }

        if amount > self.balance {
            return Err(BankingError::insufficient_funds(
                &self.account_number,
                self.balance,
                amount,
            ));
        }

        let new_balance = self.balance.checked_sub(amount).ok_or_else(|| {
            BankingError::arithmetic_overflow(TransactionType::Withdrawal, &self.account_number)
        })?;
        if was_rounded(new_balance, self.balance, amount) {
            return Err(BankingError::precision_loss(
                TransactionType::Withdrawal,
                &self.account_number,
            ));
        }

        self.balance = new_balance;
        self.transactions
            .push(Transaction::new(TransactionType::Withdrawal, amount));

        info!(account = %self.account_number, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    /// Render the account header followed by each transaction
    pub fn display_transactions(&self) -> TransactionHistory<'_> {
        TransactionHistory { account: self }
    }
}

/// Whether `result` of adding or subtracting `a` and `b` lost digits
///
/// `Decimal` keeps the larger operand scale unless the mantissa runs out of
/// its 96 bits, in which case it rounds to a smaller scale. Trailing zeros
/// are ignored so an amount such as `1.000` never counts as rounded.
fn was_rounded(result: Decimal, a: Decimal, b: Decimal) -> bool {
    let needed = a.normalize().scale().max(b.normalize().scale());
    result.scale() < needed
}

/// Display adapter for an account's transaction history
///
/// One line per entry, each terminated by a newline.
#[derive(Debug, Clone, Copy)]
pub struct TransactionHistory<'a> {
    account: &'a Account,
}

impl fmt::Display for TransactionHistory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transactions for Account: {}", self.account.account_number)?;
        for transaction in &self.account.transactions {
            writeln!(f, "{}", transaction)?;
        }
        Ok(())
    }
}
