//! Bank account models
//!
//! The account number is stored only as an encryption envelope. Rows written
//! before encryption was introduced may still carry the number in plain text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BankAccountId;

/// A bank account as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: BankAccountId,

    /// Bank name (e.g., "BCA")
    pub name: String,

    /// Account number as an `iv:authTag:ciphertext` envelope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number_encrypted: Option<String>,

    /// Plaintext account number of legacy rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_account_number: Option<String>,

    /// Name of the account holder
    pub account_name: String,

    pub created_at: DateTime<Utc>,
}

/// Input for registering a bank account
#[derive(Debug, Clone, Deserialize)]
pub struct NewBankAccount {
    pub name: String,
    pub account_number: String,
    pub account_name: String,
}

impl NewBankAccount {
    pub fn new(
        name: impl Into<String>,
        account_number: impl Into<String>,
        account_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            account_number: account_number.into(),
            account_name: account_name.into(),
        }
    }

    /// Validate that every field is filled in
    pub fn validate(&self) -> Result<(), BankAccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(BankAccountValidationError::EmptyName);
        }
        if self.account_number.trim().is_empty() {
            return Err(BankAccountValidationError::EmptyAccountNumber);
        }
        if self.account_name.trim().is_empty() {
            return Err(BankAccountValidationError::EmptyAccountName);
        }
        Ok(())
    }
}

/// Where the account number shown in a view came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountNumberSource {
    /// Decrypted from the envelope
    Encrypted,
    /// Read from the plaintext legacy column
    Legacy,
    /// Could not be recovered; only the mask is shown
    Unavailable,
}

impl fmt::Display for AccountNumberSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypted => write!(f, "encrypted"),
            Self::Legacy => write!(f, "legacy"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// A bank account prepared for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankAccountView {
    pub id: BankAccountId,
    pub name: String,
    /// Full account number, when it could be recovered
    pub account_number: Option<String>,
    pub account_number_masked: String,
    pub account_name: String,
    pub created_at: DateTime<Utc>,
    pub source: AccountNumberSource,
}

/// Validation errors for bank account input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankAccountValidationError {
    EmptyName,
    EmptyAccountNumber,
    EmptyAccountName,
}

impl fmt::Display for BankAccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bank name is required"),
            Self::EmptyAccountNumber => write!(f, "Account number is required"),
            Self::EmptyAccountName => write!(f, "Account holder name is required"),
        }
    }
}

impl std::error::Error for BankAccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(NewBankAccount::new("BCA", "1234567890", "Budi").validate().is_ok());
        assert_eq!(
            NewBankAccount::new(" ", "1234567890", "Budi").validate(),
            Err(BankAccountValidationError::EmptyName)
        );
        assert_eq!(
            NewBankAccount::new("BCA", "", "Budi").validate(),
            Err(BankAccountValidationError::EmptyAccountNumber)
        );
        assert_eq!(
            NewBankAccount::new("BCA", "1234567890", "").validate(),
            Err(BankAccountValidationError::EmptyAccountName)
        );
    }

    #[test]
    fn test_legacy_row_deserializes() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "BRI",
            "legacy_account_number": "0987654321",
            "account_name": "Siti",
            "created_at": "2024-03-01T08:00:00Z"
        }"#;

        let account: BankAccount = serde_json::from_str(json).unwrap();
        assert!(account.account_number_encrypted.is_none());
        assert_eq!(account.legacy_account_number.as_deref(), Some("0987654321"));
    }

    #[test]
    fn test_source_serializes_lowercase() {
        let json = serde_json::to_string(&AccountNumberSource::Legacy).unwrap();
        assert_eq!(json, "\"legacy\"");
    }
}
