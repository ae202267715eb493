//! Export module
//!
//! Writes truck statements to CSV (spreadsheet-compatible).

pub mod csv;

pub use self::csv::{export_statement_csv, export_statement_file, STATEMENT_HEADERS};
