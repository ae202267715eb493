//! Custom error types for muatan
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for muatan operations
#[derive(Error, Debug)]
pub enum MuatanError {
    /// Configuration-related errors (e.g. the encryption secret is missing)
    #[error("Configuration error: {0}")]
    Config(String),

    /// An encrypted value does not have the `iv:authTag:ciphertext` shape
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The authentication tag did not verify (tampering, wrong key, corruption)
    #[error("Authentication failed: encrypted value was altered or the key is wrong")]
    AuthenticationFailed,

    /// Cipher or RNG failures unrelated to the envelope contents
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Validation errors for input data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl MuatanError {
    /// Create a validation error for a blank required field
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("{} is required", field))
    }

    /// Check if this error means the envelope could not be opened
    ///
    /// Callers holding legacy plaintext values branch on this.
    pub fn is_decrypt_failure(&self) -> bool {
        matches!(self, Self::MalformedEnvelope(_) | Self::AuthenticationFailed)
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for MuatanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MuatanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for MuatanError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for muatan operations
pub type MuatanResult<T> = Result<T, MuatanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MuatanError::Config("ENCRYPTION_KEY is not set".into());
        assert_eq!(err.to_string(), "Configuration error: ENCRYPTION_KEY is not set");
    }

    #[test]
    fn test_required_error() {
        let err = MuatanError::required("Bank name");
        assert_eq!(err.to_string(), "Validation error: Bank name is required");
        assert!(err.is_validation());
    }

    #[test]
    fn test_decrypt_failure_classification() {
        assert!(MuatanError::AuthenticationFailed.is_decrypt_failure());
        assert!(MuatanError::MalformedEnvelope("2 segments".into()).is_decrypt_failure());
        assert!(!MuatanError::Config("missing".into()).is_decrypt_failure());
        assert!(MuatanError::Config("missing".into()).is_config());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MuatanError = io_err.into();
        assert!(matches!(err, MuatanError::Io(_)));
    }
}
