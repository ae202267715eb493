//! Secret CLI commands
//!
//! Encrypts, decrypts and masks single field values with the key configured
//! in `ENCRYPTION_KEY`.

use clap::Subcommand;

use crate::crypto::{self, mask_account_number, SecureString};
use crate::error::{MuatanError, MuatanResult};

/// Secret subcommands
#[derive(Subcommand, Debug)]
pub enum SecretCommands {
    /// Encrypt a value into an `iv:authTag:ciphertext` envelope
    Encrypt {
        /// Value to encrypt (prompted for, hidden, when omitted)
        plaintext: Option<String>,
    },
    /// Decrypt an envelope
    Decrypt {
        /// Envelope produced by `secret encrypt`
        envelope: String,
    },
    /// Mask an account number, keeping its last four characters
    Mask {
        /// Account number to mask
        number: String,
    },
}

/// Handle a secret command
pub fn handle_secret_command(cmd: SecretCommands) -> MuatanResult<()> {
    match cmd {
        SecretCommands::Encrypt { plaintext } => {
            let plaintext = match plaintext {
                Some(value) => SecureString::new(value),
                None => prompt_secret("Value to encrypt: ")?,
            };
            println!("{}", crypto::encrypt(plaintext.as_str())?);
        }
        SecretCommands::Decrypt { envelope } => {
            let plaintext = SecureString::new(crypto::decrypt(envelope.trim())?);
            println!("{}", plaintext.as_str());
        }
        SecretCommands::Mask { number } => {
            println!("{}", mask_account_number(&number));
        }
    }

    Ok(())
}

/// Read a value from the terminal without echoing it
pub(crate) fn prompt_secret(prompt: &str) -> MuatanResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::new)
        .map_err(|e| MuatanError::Io(format!("Failed to read value: {}", e)))
}
