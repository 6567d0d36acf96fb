//! CSV format handling for the account summary
//!
//! Writes one row per account with columns:
//! customer_id, name, account_number, balance, transactions
//!
//! Rows follow customer insertion order, then account insertion order
//! within each customer. Customers without accounts produce no rows.

use crate::core::BankingService;
use crate::types::ShellError;
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 5] = [
    "customer_id",
    "name",
    "account_number",
    "balance",
    "transactions",
];

/// One output row of the account summary
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AccountRow<'a> {
    pub customer_id: &'a str,
    pub name: &'a str,
    pub account_number: &'a str,
    pub balance: Decimal,
    pub transactions: usize,
}

/// Flatten the service into summary rows
pub fn account_rows(service: &BankingService) -> Vec<AccountRow<'_>> {
    service
        .customers()
        .iter()
        .flat_map(|customer| {
            customer.accounts().iter().map(move |account| AccountRow {
                customer_id: customer.customer_id(),
                name: customer.name(),
                account_number: account.account_number(),
                balance: account.balance(),
                transactions: account.transactions().len(),
            })
        })
        .collect()
}

/// Write the account summary in CSV format
///
/// The header is always written, even when there are no accounts.
///
/// # Errors
///
/// Returns `CsvError` or `IoError` if the output cannot be written.
pub fn write_accounts_csv(
    service: &BankingService,
    output: &mut dyn Write,
) -> Result<(), ShellError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    writer.write_record(HEADER)?;
    for row in account_rows(service) {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
