//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod amount;
pub mod bank;
pub mod secret;
pub mod settle;
pub mod statement;

pub use amount::{handle_amount_command, AmountCommands};
pub use bank::{handle_bank_command, BankCommands};
pub use secret::{handle_secret_command, SecretCommands};
pub use settle::{handle_settle_command, SettleArgs};
pub use statement::{handle_statement_command, StatementArgs};
