//! Error types for the banking ledger
//!
//! Every ledger operation either succeeds or returns one of the variants
//! below. Errors propagate unchanged from account to customer to service,
//! and only the shell reports them to the user.
//!
//! # Error Categories
//!
//! - **Invalid arguments**: non-positive deposit or withdrawal amounts
//! - **Insufficient funds**: a withdrawal larger than the current balance
//! - **Not found**: customer or account lookup by identifier failed
//! - **Arithmetic overflow**: a balance update left the decimal range
//! - **Precision loss**: a balance update would have been rounded
//! - **Shell errors**: unreadable input, bad numbers, report output

use crate::types::transaction::TransactionType;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Entity that a lookup was searching for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customer,
    Account,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Customer => f.write_str("Customer"),
            EntityKind::Account => f.write_str("Account"),
        }
    }
}

/// Main error type for the banking ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankingError {
    /// Deposit or withdrawal amount was zero or negative
    ///
    /// The account is left untouched.
    #[error("{operation} amount must be greater than zero (got {amount})")]
    InvalidArgument {
        /// Operation that rejected the amount
        operation: TransactionType,
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal exceeds the current balance
    #[error("Insufficient balance in account {account}: available {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// No customer or account matches the identifier
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// What was being looked up
        entity: EntityKind,
        /// The identifier that did not match
        id: String,
    },

    /// Balance update would leave the representable decimal range
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: TransactionType,
        /// Account number
        account: String,
    },

    /// Exact balance needs more than 28 significant digits
    ///
    /// The decimal type would round the result, so the update is refused.
    #[error("Precision loss in {operation} for account {account}: result cannot be represented exactly")]
    PrecisionLoss {
        /// Operation that would round
        operation: TransactionType,
        /// Account number
        account: String,
    },
}

impl BankingError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(operation: TransactionType, amount: Decimal) -> Self {
        BankingError::InvalidArgument { operation, amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        BankingError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create a NotFound error for a customer lookup
    pub fn customer_not_found(id: &str) -> Self {
        BankingError::NotFound {
            entity: EntityKind::Customer,
            id: id.to_string(),
        }
    }

    /// Create a NotFound error for an account lookup
    pub fn account_not_found(account: &str) -> Self {
        BankingError::NotFound {
            entity: EntityKind::Account,
            id: account.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: TransactionType, account: &str) -> Self {
        BankingError::ArithmeticOverflow {
            operation,
            account: account.to_string(),
        }
    }

    /// Create a PrecisionLoss error
    pub fn precision_loss(operation: TransactionType, account: &str) -> Self {
        BankingError::PrecisionLoss {
            operation,
            account: account.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BankingError::NotFound { .. })
    }
}

/// Errors raised by the interactive shell and the summary report
///
/// Ledger failures are wrapped unchanged; the shell reports them and
/// keeps reading. Everything else here is either an input problem
/// (also reported and skipped) or fatal I/O.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShellError {
    /// A ledger operation failed
    #[error(transparent)]
    Banking(#[from] BankingError),

    /// Script file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV summary could not be written
    #[error("CSV write error: {message}")]
    CsvError {
        /// Description of the CSV error
        message: String,
    },

    /// A numeric field could not be parsed
    #[error("Invalid {field} '{input}'")]
    InvalidNumber {
        /// Name of the field being read
        field: String,
        /// The raw text entered
        input: String,
    },

    /// Input ended before the session was finished
    #[error("Unexpected end of input")]
    EndOfInput,
}

impl ShellError {
    /// Create an InvalidNumber error
    pub fn invalid_number(field: &str, input: &str) -> Self {
        ShellError::InvalidNumber {
            field: field.to_string(),
            input: input.to_string(),
        }
    }

    /// Whether the shell should report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ShellError::Banking(_) | ShellError::InvalidNumber { .. }
        )
    }
}

// Conversion from io::Error to ShellError
impl From<std::io::Error> for ShellError {
    fn from(error: std::io::Error) -> Self {
        ShellError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ShellError
impl From<csv::Error> for ShellError {
    fn from(error: csv::Error) -> Self {
        ShellError::CsvError {
            message: error.to_string(),
        }
    }
}
