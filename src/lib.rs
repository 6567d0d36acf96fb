//! Banking Ledger Library
//! # Overview
//!
//! This library provides an in-memory banking ledger: customers own accounts,
//! accounts own an append-only transaction history, and a menu-driven shell
//! drives everything through a single `BankingService`.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, identifiers, errors)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Balance and transaction history of one account
//!   - [`core::customer`] - A customer's accounts and account lookups
//!   - [`core::service`] - Facade resolving customers and accounts by identifier
//! - [`shell`] - Menu-driven input loop over the service
//! - [`io`] - Line input and the CSV account summary
//!
//! # Transaction Types
//!
//! - **Deposit**: Credit funds to an account (amount must be positive)
//! - **Withdrawal**: Debit funds from an account (amount must be positive
//!   and no greater than the balance)
//!
//! # Errors
//!
//! Every operation returns `Result<_, BankingError>`. A failed operation
//! leaves balances and histories unchanged.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod shell;
pub mod types;

pub use core::{Account, BankingService, Customer};
pub use io::write_accounts_csv;
pub use types::{
    AccountNumber, BankingError, CustomerId, EntityKind, ShellError, Transaction,
    TransactionType,
};
