//! Process-wide settings
//!
//! Resolved from environment variables. The binary loads a `.env` file into
//! the environment before these are read.

use crate::crypto::SecureString;
use crate::error::{MuatanError, MuatanResult};

/// Environment variable holding the field encryption secret
pub const ENCRYPTION_KEY_VAR: &str = "ENCRYPTION_KEY";

/// Environment variable holding the tracing filter directive
pub const LOG_FILTER_VAR: &str = "MUATAN_LOG";

/// Filter used when [`LOG_FILTER_VAR`] is unset
pub const DEFAULT_LOG_FILTER: &str = "muatan_cli=info,muatan=info";

/// Settings for muatan
#[derive(Debug, Clone)]
pub struct Settings {
    /// Secret the field encryption key is derived from
    encryption_secret: Option<SecureString>,

    /// Tracing filter directive (e.g. `muatan_cli=debug`)
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            encryption_secret: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let encryption_secret = lookup(ENCRYPTION_KEY_VAR)
            .filter(|secret| !secret.is_empty())
            .map(SecureString::from);

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            encryption_secret,
            log_filter,
        }
    }

    /// Settings with an explicit encryption secret (useful for testing)
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            encryption_secret: Some(SecureString::new(secret)),
            ..Default::default()
        }
    }

    pub fn has_encryption_secret(&self) -> bool {
        self.encryption_secret.is_some()
    }

    /// The configured encryption secret
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the secret is unset or empty.
    pub fn encryption_secret(&self) -> MuatanResult<&SecureString> {
        self.encryption_secret.as_ref().ok_or_else(|| {
            MuatanError::Config(format!(
                "{} environment variable is not set",
                ENCRYPTION_KEY_VAR
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.has_encryption_secret());
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_reads_secret_and_filter() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENCRYPTION_KEY_VAR, "s3cret"),
            (LOG_FILTER_VAR, "muatan_cli=debug"),
        ]));

        assert_eq!(settings.encryption_secret().unwrap().as_str(), "s3cret");
        assert_eq!(settings.log_filter, "muatan_cli=debug");
    }

    #[test]
    fn test_missing_secret_is_config_error() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        let err = settings.encryption_secret().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains(ENCRYPTION_KEY_VAR));
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let settings = Settings::from_lookup(lookup_from(&[(ENCRYPTION_KEY_VAR, "")]));
        assert!(!settings.has_encryption_secret());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let settings = Settings::with_secret("s3cret");
        assert!(!format!("{:?}", settings).contains("s3cret"));
    }
}
