//! Display formatting for terminal output
//!
//! Formats settlements, statements and bank accounts as plain-text tables.

pub mod bank;
pub mod settlement;
pub mod statement;

pub use bank::{format_bank_account_details, format_bank_account_list};
pub use settlement::format_settlement;
pub use statement::format_statement;
