//! Amount CLI commands
//!
//! Converts between Indonesian-formatted text and plain decimal amounts.

use std::str::FromStr;

use clap::Subcommand;
use rust_decimal::Decimal;

use crate::error::{MuatanError, MuatanResult};
use crate::models::{parse_localized_amount, Rupiah};

/// Amount subcommands
#[derive(Subcommand, Debug)]
pub enum AmountCommands {
    /// Parse Indonesian notation (e.g. "Rp 1.500.000,50") into a plain number
    Parse {
        /// Text to parse
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Format a plain number (e.g. "1500000.5") in Indonesian notation
    Format {
        /// Amount with a '.' decimal point
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle an amount command
pub fn handle_amount_command(cmd: AmountCommands) -> MuatanResult<()> {
    match cmd {
        AmountCommands::Parse { text } => {
            let amount = parse_localized_amount(&text);
            println!("{}", amount.amount().normalize());
        }
        AmountCommands::Format { amount } => {
            let value = Decimal::from_str(amount.trim()).map_err(|e| {
                MuatanError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;
            println!("{}", Rupiah::from_decimal(value));
        }
    }

    Ok(())
}
