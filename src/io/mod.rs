//! I/O module
//!
//! Handles shell input and report output.
//!
//! # Components
//!
//! - `line_reader` - Line-oriented reader with iterator interface
//! - `csv_format` - CSV account summary serialization

pub mod csv_format;
pub mod line_reader;

pub use csv_format::{account_rows, write_accounts_csv, AccountRow};
pub use line_reader::LineReader;
