//! Strongly-typed ID wrappers
//!
//! Wrapping the UUID keeps bank account IDs from being mixed up with any
//! other identifier at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used when displaying a shortened bank account ID
const BANK_ACCOUNT_PREFIX: &str = "bank-";

/// Identifier of a registered bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BankAccountId(Uuid);

impl BankAccountId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for BankAccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BankAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", BANK_ACCOUNT_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for BankAccountId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for BankAccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(BANK_ACCOUNT_PREFIX).unwrap_or(s);
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = BankAccountId::new();
        assert!(!id.as_uuid().is_nil());
        assert_ne!(id, BankAccountId::new());
    }

    #[test]
    fn test_id_display() {
        let display = BankAccountId::new().to_string();
        assert!(display.starts_with("bank-"));
        assert_eq!(display.len(), 13);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: BankAccountId = format!("bank-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_id_serialization() {
        let id = BankAccountId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: BankAccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
