//! Bank account CLI commands
//!
//! Registers accounts with an encrypted account number and reveals stored
//! accounts for display.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::crypto::global_cipher;
use crate::display::{format_bank_account_details, format_bank_account_list};
use crate::error::{MuatanError, MuatanResult};
use crate::models::{BankAccount, NewBankAccount};
use crate::services::BankAccountService;

use super::secret::prompt_secret;

/// Bank account subcommands
#[derive(Subcommand, Debug)]
pub enum BankCommands {
    /// Register a bank account and print the record to store as JSON
    Register {
        /// Bank name (e.g. BCA)
        #[arg(short, long)]
        name: String,
        /// Account holder name
        #[arg(short = 'a', long)]
        account_name: String,
        /// Account number (prompted for, hidden, when omitted)
        #[arg(long)]
        account_number: Option<String>,
    },
    /// Show stored bank accounts with masked account numbers
    ///
    /// A single account is shown in detail, several as a table.
    Reveal {
        /// JSON file holding one stored account or an array of them
        file: PathBuf,
        /// Print the views as JSON, including full account numbers
        #[arg(long)]
        json: bool,
    },
}

/// Handle a bank command
pub fn handle_bank_command(cmd: BankCommands) -> MuatanResult<()> {
    let service = BankAccountService::new(global_cipher()?);

    match cmd {
        BankCommands::Register {
            name,
            account_name,
            account_number,
        } => {
            let account_number = match account_number {
                Some(number) => number,
                None => prompt_secret("Account number: ")?.as_str().to_string(),
            };

            let (account, _) =
                service.register(NewBankAccount::new(name, account_number, account_name))?;
            println!("{}", serde_json::to_string_pretty(&account)?);
        }
        BankCommands::Reveal { file, json } => {
            let accounts = read_accounts(&file)?;
            let views = service.reveal_all(&accounts);

            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else if let [view] = views.as_slice() {
                print!("{}", format_bank_account_details(view));
            } else {
                print!("{}", format_bank_account_list(&views));
            }
        }
    }

    Ok(())
}

fn read_accounts(path: &Path) -> MuatanResult<Vec<BankAccount>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| MuatanError::Io(format!("{}: {}", path.display(), e)))?;

    let value: serde_json::Value = serde_json::from_str(&contents)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}
