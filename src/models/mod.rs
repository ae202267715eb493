//! Core data models for muatan
//!
//! Money amounts, cargo jobs and records, settlement results, and bank
//! accounts.

pub mod bank;
pub mod cargo;
pub mod ids;
pub mod rupiah;
pub mod settlement;

pub use bank::{AccountNumberSource, BankAccount, BankAccountView, NewBankAccount};
pub use cargo::{CargoJob, CargoRecord, CargoValidationError};
pub use ids::BankAccountId;
pub use rupiah::{format_localized_amount, parse_localized_amount, Rupiah};
pub use settlement::SettlementResult;
