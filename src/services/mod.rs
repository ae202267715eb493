//! Service layer for muatan
//!
//! Business logic on top of the models: settlement, truck statements, CSV
//! import, and bank account encryption.

pub mod bank;
pub mod import;
pub mod settlement;
pub mod statement;

pub use bank::BankAccountService;
pub use import::{import_cargo_csv, import_cargo_file, ColumnMapping};
pub use settlement::{compute_settlement, settle_record, CUT_PAYMENT_RATE};
pub use statement::{StatementRow, TruckStatement};
