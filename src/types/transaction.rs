//! Transaction-related types for the banking ledger
//!
//! This module defines the transaction kinds and the immutable transaction
//! record appended to an account's history on every successful deposit or
//! withdrawal.

use rust_decimal::Decimal;
use std::fmt;

/// Customer identifier
pub type CustomerId = String;

/// Account number, unique in practice within its owning customer
pub type AccountNumber = String;

/// Kinds of ledger events recorded against an account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Only recorded when the balance covered the requested amount.
    Withdrawal,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of one ledger event
///
/// Fields are private so a transaction cannot change once it is part of an
/// account history. No validation happens here; the account checks the
/// amount before a transaction is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionType,
    amount: Decimal,
}

impl Transaction {
    pub fn new(kind: TransactionType, amount: Decimal) -> Self {
        Transaction { kind, amount }
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction: {} | Amount: {}",
            self.kind,
            self.amount.normalize()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::deposit(TransactionType::Deposit, Decimal::new(50, 0), "Transaction: Deposit | Amount: 50")]
    #[case::withdrawal(
        TransactionType::Withdrawal,
        Decimal::new(3050, 2),
        "Transaction: Withdrawal | Amount: 30.5"
    )]
    #[case::whole_amount_with_scale(
        TransactionType::Deposit,
        Decimal::new(2000, 2),
        "Transaction: Deposit | Amount: 20"
    )]
    fn test_transaction_display(
        #[case] kind: TransactionType,
        #[case] amount: Decimal,
        #[case] expected: &str,
    ) {
        assert_eq!(Transaction::new(kind, amount).to_string(), expected);
    }

    #[test]
    fn test_transaction_accessors() {
        let tx = Transaction::new(TransactionType::Withdrawal, Decimal::new(125, 1));
        assert_eq!(tx.kind(), TransactionType::Withdrawal);
        assert_eq!(tx.amount(), Decimal::new(125, 1));
    }
}
