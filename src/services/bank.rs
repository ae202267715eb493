//! Bank account service
//!
//! Encrypts account numbers on registration and recovers them for display.
//! Reading never fails: rows that cannot be decrypted fall back to their
//! legacy plaintext, or to a fully masked view.

use chrono::Utc;
use tracing::warn;

use crate::crypto::{mask_account_number, FieldCipher};
use crate::error::{MuatanError, MuatanResult};
use crate::models::{
    AccountNumberSource, BankAccount, BankAccountId, BankAccountView, NewBankAccount,
};

/// Service for bank account registration and display
pub struct BankAccountService<'a> {
    cipher: &'a FieldCipher,
}

impl<'a> BankAccountService<'a> {
    /// Create a new bank account service
    pub fn new(cipher: &'a FieldCipher) -> Self {
        Self { cipher }
    }

    /// Register a bank account, encrypting its number
    ///
    /// Returns the record to persist and its display view.
    pub fn register(&self, input: NewBankAccount) -> MuatanResult<(BankAccount, BankAccountView)> {
        input
            .validate()
            .map_err(|e| MuatanError::Validation(e.to_string()))?;

        let account_number = input.account_number.trim();
        let envelope = self.cipher.encrypt(account_number)?;

        let account = BankAccount {
            id: BankAccountId::new(),
            name: input.name.trim().to_string(),
            account_number_encrypted: Some(envelope),
            legacy_account_number: None,
            account_name: input.account_name.trim().to_string(),
            created_at: Utc::now(),
        };

        let view = view_of(
            &account,
            Some(account_number.to_string()),
            AccountNumberSource::Encrypted,
        );

        Ok((account, view))
    }

    /// Recover the account number of a stored account for display
    ///
    /// * a valid envelope is decrypted
    /// * a stored value that is not an envelope at all is an old plaintext row
    ///   (unless a legacy column is present, which wins)
    /// * an envelope that fails authentication is never shown; the legacy
    ///   column is used if present, otherwise only the mask
    pub fn reveal(&self, account: &BankAccount) -> BankAccountView {
        let Some(stored) = account.account_number_encrypted.as_deref() else {
            return self.fallback(account, None);
        };

        match self.cipher.decrypt(stored) {
            Ok(number) => view_of(account, Some(number), AccountNumberSource::Encrypted),
            Err(MuatanError::MalformedEnvelope(reason)) => {
                warn!(account = %account.id, %reason, "stored account number is not an envelope");
                self.fallback(account, Some(stored))
            }
            Err(err) => {
                warn!(account = %account.id, error = %err, "could not decrypt account number");
                self.fallback(account, None)
            }
        }
    }

    /// Reveal every account
    pub fn reveal_all(&self, accounts: &[BankAccount]) -> Vec<BankAccountView> {
        accounts.iter().map(|a| self.reveal(a)).collect()
    }

    fn fallback(&self, account: &BankAccount, plaintext_in_place: Option<&str>) -> BankAccountView {
        let legacy = account
            .legacy_account_number
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(plaintext_in_place.filter(|n| !n.trim().is_empty()));

        match legacy {
            Some(number) => view_of(account, Some(number.to_string()), AccountNumberSource::Legacy),
            None => view_of(account, None, AccountNumberSource::Unavailable),
        }
    }
}

fn view_of(
    account: &BankAccount,
    account_number: Option<String>,
    source: AccountNumberSource,
) -> BankAccountView {
    let account_number_masked = mask_account_number(account_number.as_deref().unwrap_or(""));

    BankAccountView {
        id: account.id,
        name: account.name.clone(),
        account_number,
        account_number_masked,
        account_name: account.account_name.clone(),
        created_at: account.created_at,
        source,
    }
}
