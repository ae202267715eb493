//! Cryptographic functions for muatan
//!
//! Provides AES-256-GCM field encryption for bank account numbers, keyed by
//! a SHA-256 digest of the configured secret, plus display masking.

pub mod encryption;
pub mod key_derivation;
pub mod mask;
pub mod secure_memory;

pub use encryption::{decrypt, encrypt, global_cipher, Envelope, FieldCipher};
pub use key_derivation::{derive_key, derive_key_from_secret, DerivedKey};
pub use mask::mask_account_number;
pub use secure_memory::SecureString;
