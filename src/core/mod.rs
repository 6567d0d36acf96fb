//! Core business logic module
//!
//! This module contains the ledger components, leaves first:
//! - `account` - Balance and transaction history of a single account
//! - `customer` - A customer's accounts and account lookups
//! - `service` - The `BankingService` facade over all customers

pub mod account;
pub mod customer;
pub mod service;

pub use account::{Account, TransactionHistory};
pub use customer::{AccountListing, Customer};
pub use service::BankingService;
