//! muatan - cargo settlement and field encryption for a trucking back office
//!
//! This library computes what a truck's cargo job pays out, reads and writes
//! Rupiah amounts in Indonesian notation, and protects bank account numbers
//! with AES-256-GCM field encryption.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings resolved from the environment
//! - `error`: Custom error types
//! - `models`: Core data models (Rupiah, cargo jobs and records, bank accounts)
//! - `services`: Settlement, statements, CSV import and bank accounts
//! - `crypto`: Key derivation, the field cipher and account number masking
//! - `display`: Plain-text formatting for the terminal
//! - `export`: CSV export of statements
//! - `cli`: Command handlers for the `muatan` binary
//!
//! # Example
//!
//! ```rust
//! use muatan_cli::models::{parse_localized_amount, CargoJob};
//! use muatan_cli::services::compute_settlement;
//!
//! let job = CargoJob::new().with_freight_cost(parse_localized_amount("Rp 1.000.000"));
//! let result = compute_settlement(&job);
//! assert_eq!(result.total.to_string(), "Rp 700.000");
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{MuatanError, MuatanResult};
