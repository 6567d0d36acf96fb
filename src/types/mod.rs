//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `transaction`: Transaction records, kinds and identifiers
//! - `error`: Error types for the banking ledger

pub mod error;
pub mod transaction;

pub use error::{BankingError, EntityKind, ShellError};
pub use transaction::{AccountNumber, CustomerId, Transaction, TransactionType};
