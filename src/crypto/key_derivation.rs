//! Key derivation for field encryption
//!
//! Turns the configured secret into a 256-bit AES key by hashing it with
//! SHA-256. This accepts secrets of any length and is deterministic, but it is
//! not a password KDF: the configured secret must already be high-entropy.

use std::fmt;

use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::Settings;
use crate::error::MuatanResult;

/// Size of an AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// A derived encryption key, zeroed when dropped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive the field encryption key from the configured secret
///
/// # Errors
///
/// Returns a configuration error when no secret is configured. Callers must
/// not fall back to a default key.
pub fn derive_key(settings: &Settings) -> MuatanResult<DerivedKey> {
    let secret = settings.encryption_secret()?;
    let key = derive_key_from_secret(secret.as_str());
    debug!("derived field encryption key");
    Ok(key)
}

/// Hash an arbitrary-length secret into exactly [`KEY_SIZE`] bytes
pub fn derive_key_from_secret(secret: &str) -> DerivedKey {
    let key: [u8; KEY_SIZE] = Sha256::digest(secret.as_bytes()).into();
    DerivedKey { key }
}
