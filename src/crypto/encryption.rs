//! AES-256-GCM field encryption
//!
//! Encrypts a single sensitive string (a bank account number) into the
//! storage envelope `iv:authTag:ciphertext`, each segment lowercase hex.
//! The IV is 16 random bytes drawn fresh for every call and the tag is 16
//! bytes. Decryption verifies the tag before any plaintext is returned.

use std::fmt;

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{AeadInPlace, KeyInit, OsRng};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce, Tag};
use once_cell::sync::OnceCell;

use crate::config::Settings;
use crate::error::{MuatanError, MuatanResult};

use super::key_derivation::{derive_key, DerivedKey};

/// Size of the initialization vector in bytes
pub const IV_SIZE: usize = 16;

/// Size of the GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// Separator between envelope segments
const SEPARATOR: char = ':';

/// AES-256 in GCM mode with a 128-bit IV
type Aes256Gcm16 = AesGcm<Aes256, U16>;

static GLOBAL_CIPHER: OnceCell<FieldCipher> = OnceCell::new();

/// A parsed `iv:authTag:ciphertext` envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub iv: [u8; IV_SIZE],
    pub tag: [u8; TAG_SIZE],
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Parse an envelope string
    ///
    /// # Errors
    ///
    /// Returns [`MuatanError::MalformedEnvelope`] when the string does not have
    /// exactly three segments, a segment is not hex, or the IV or tag has the
    /// wrong length.
    pub fn parse(envelope: &str) -> MuatanResult<Self> {
        let segments: Vec<&str> = envelope.split(SEPARATOR).collect();
        let [iv_hex, tag_hex, ciphertext_hex] = segments.as_slice() else {
            return Err(MuatanError::MalformedEnvelope(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        };

        Ok(Self {
            iv: decode_fixed("IV", iv_hex)?,
            tag: decode_fixed("auth tag", tag_hex)?,
            ciphertext: decode_segment("ciphertext", ciphertext_hex)?,
        })
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            hex::encode(self.iv),
            hex::encode(self.tag),
            hex::encode(&self.ciphertext),
            sep = SEPARATOR
        )
    }
}

fn decode_segment(name: &str, segment: &str) -> MuatanResult<Vec<u8>> {
    hex::decode(segment)
        .map_err(|e| MuatanError::MalformedEnvelope(format!("{} is not valid hex: {}", name, e)))
}

fn decode_fixed<const N: usize>(name: &str, segment: &str) -> MuatanResult<[u8; N]> {
    let bytes = decode_segment(name, segment)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| {
        MuatanError::MalformedEnvelope(format!(
            "{} must be {} bytes, got {}",
            name,
            N,
            bytes.len()
        ))
    })
}

/// Encrypts and decrypts field values under one derived key
///
/// Holds the key so it is derived once, not per call.
#[derive(Debug, Clone)]
pub struct FieldCipher {
    key: DerivedKey,
}

impl FieldCipher {
    pub fn new(key: DerivedKey) -> Self {
        Self { key }
    }

    /// Derive the key from settings
    pub fn from_settings(settings: &Settings) -> MuatanResult<Self> {
        Ok(Self::new(derive_key(settings)?))
    }

    /// Derive the key from the `ENCRYPTION_KEY` environment variable
    pub fn from_env() -> MuatanResult<Self> {
        Self::from_settings(&Settings::from_env())
    }

    fn cipher(&self) -> MuatanResult<Aes256Gcm16> {
        Aes256Gcm16::new_from_slice(self.key.as_bytes())
            .map_err(|e| MuatanError::Encryption(format!("Failed to create cipher: {}", e)))
    }

    /// Encrypt under a fresh random IV
    pub fn seal(&self, plaintext: &str) -> MuatanResult<Envelope> {
        let cipher = self.cipher()?;

        let mut iv = [0u8; IV_SIZE];
        OsRng
            .try_fill_bytes(&mut iv)
            .map_err(|e| MuatanError::Encryption(format!("Failed to generate IV: {}", e)))?;

        let mut buffer = plaintext.as_bytes().to_vec();
        let tag = cipher
            .encrypt_in_place_detached(Nonce::<U16>::from_slice(&iv), b"", &mut buffer)
            .map_err(|_| MuatanError::Encryption("Encryption failed".to_string()))?;

        let mut tag_bytes = [0u8; TAG_SIZE];
        tag_bytes.copy_from_slice(&tag);

        Ok(Envelope {
            iv,
            tag: tag_bytes,
            ciphertext: buffer,
        })
    }

    /// Verify and decrypt a parsed envelope
    ///
    /// Fails with [`MuatanError::AuthenticationFailed`] if the tag does not
    /// match; no plaintext is produced in that case.
    pub fn open(&self, envelope: &Envelope) -> MuatanResult<String> {
        let cipher = self.cipher()?;

        let mut buffer = envelope.ciphertext.clone();
        cipher
            .decrypt_in_place_detached(
                Nonce::<U16>::from_slice(&envelope.iv),
                b"",
                &mut buffer,
                Tag::<U16>::from_slice(&envelope.tag),
            )
            .map_err(|_| MuatanError::AuthenticationFailed)?;

        String::from_utf8(buffer)
            .map_err(|_| MuatanError::Encryption("Decrypted value is not valid UTF-8".to_string()))
    }

    /// Encrypt a string into its envelope representation
    pub fn encrypt(&self, plaintext: &str) -> MuatanResult<String> {
        Ok(self.seal(plaintext)?.to_string())
    }

    /// Decrypt an envelope string
    pub fn decrypt(&self, envelope: &str) -> MuatanResult<String> {
        self.open(&Envelope::parse(envelope)?)
    }
}

/// The process-wide cipher, derived from the environment on first use
///
/// A failed initialization (missing secret) is not cached, so fixing the
/// configuration and retrying works.
pub fn global_cipher() -> MuatanResult<&'static FieldCipher> {
    GLOBAL_CIPHER.get_or_try_init(FieldCipher::from_env)
}

/// Encrypt with the process-wide key
pub fn encrypt(plaintext: &str) -> MuatanResult<String> {
    global_cipher()?.encrypt(plaintext)
}

/// Decrypt with the process-wide key
///
/// The envelope shape is checked before the key is looked up.
pub fn decrypt(envelope: &str) -> MuatanResult<String> {
    let envelope = Envelope::parse(envelope)?;
    global_cipher()?.open(&envelope)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::crypto::key_derivation::derive_key_from_secret;

    const TEST_SECRET: &str = "muatan-test-secret";

    /// "1234567890" sealed with IV 00..0f under TEST_SECRET by a reference
    /// AES-256-GCM implementation
    const KNOWN_ENVELOPE: &str =
        "000102030405060708090a0b0c0d0e0f:ac331d1e7ed838629ed34fe72d4a133a:038a82f44fda0e13d39b";

    fn test_cipher() -> FieldCipher {
        FieldCipher::new(derive_key_from_secret(TEST_SECRET))
    }

    #[test]
    fn test_encrypt_decrypt() {
        let cipher = test_cipher();
        let envelope = cipher.encrypt("1234567890").unwrap();
        assert_eq!(cipher.decrypt(&envelope).unwrap(), "1234567890");
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = test_cipher().encrypt("1234567890").unwrap();
        let segments: Vec<&str> = envelope.split(':').collect();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].len(), IV_SIZE * 2);
        assert_eq!(segments[1].len(), TAG_SIZE * 2);
        assert_eq!(segments[2].len(), "1234567890".len() * 2);
        assert!(envelope
            .chars()
            .all(|c| c == ':' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_decrypts_reference_envelope() {
        assert_eq!(test_cipher().decrypt(KNOWN_ENVELOPE).unwrap(), "1234567890");
    }

    #[test]
    fn test_empty_plaintext() {
        let cipher = test_cipher();
        let envelope = cipher.encrypt("").unwrap();
        assert!(envelope.ends_with(':'));
        assert_eq!(cipher.decrypt(&envelope).unwrap(), "");
    }

    #[test]
    fn test_plaintext_with_separator_and_unicode() {
        let cipher = test_cipher();
        for plaintext in ["12:34:56", ":::", "Rekening Ñandú 💰"] {
            let envelope = cipher.encrypt(plaintext).unwrap();
            assert_eq!(cipher.decrypt(&envelope).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_iv_unique_across_calls() {
        let cipher = test_cipher();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let envelope = cipher.seal("1234567890").unwrap();
            assert!(seen.insert(envelope.iv), "IV reused");
        }
    }

    #[test]
    fn test_same_plaintext_different_envelopes() {
        let cipher = test_cipher();
        let first = cipher.encrypt("1234567890").unwrap();
        let second = cipher.encrypt("1234567890").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_wrong_key_fails() {
        let envelope = test_cipher().encrypt("1234567890").unwrap();
        let other = FieldCipher::new(derive_key_from_secret("different-secret"));

        assert!(matches!(
            other.decrypt(&envelope),
            Err(MuatanError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_every_bit_flip_is_detected() {
        let cipher = test_cipher();
        let original = cipher.seal("1234567890").unwrap();

        for byte in 0..original.ciphertext.len() {
            for bit in 0..8 {
                let mut tampered = original.clone();
                tampered.ciphertext[byte] ^= 1 << bit;
                assert!(matches!(
                    cipher.decrypt(&tampered.to_string()),
                    Err(MuatanError::AuthenticationFailed)
                ));
            }
        }

        for byte in 0..TAG_SIZE {
            for bit in 0..8 {
                let mut tampered = original.clone();
                tampered.tag[byte] ^= 1 << bit;
                assert!(matches!(
                    cipher.decrypt(&tampered.to_string()),
                    Err(MuatanError::AuthenticationFailed)
                ));
            }
        }
    }

    #[test]
    fn test_tampered_iv_fails() {
        let cipher = test_cipher();
        let mut envelope = cipher.seal("1234567890").unwrap();
        envelope.iv[0] ^= 0x01;
        assert!(matches!(
            cipher.open(&envelope),
            Err(MuatanError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_truncated_ciphertext_fails() {
        let cipher = test_cipher();
        let mut envelope = cipher.seal("1234567890").unwrap();
        envelope.ciphertext.pop();
        assert!(matches!(
            cipher.open(&envelope),
            Err(MuatanError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_malformed_envelopes() {
        let cipher = test_cipher();
        let iv = "00".repeat(IV_SIZE);
        let tag = "00".repeat(TAG_SIZE);

        let cases = [
            String::new(),
            "not-a-valid-envelope".to_string(),
            format!("{}:{}", iv, tag),
            format!("{}:{}:00:00", iv, tag),
            format!("zz{}:{}:00", &iv[2..], tag),
            format!("{}:{}:0", iv, tag),
            format!("{}:{}:00", &iv[2..], tag),
            format!("{}:{}:00", iv, &tag[2..]),
        ];

        for case in &cases {
            assert!(
                matches!(cipher.decrypt(case), Err(MuatanError::MalformedEnvelope(_))),
                "expected malformed: {:?}",
                case
            );
        }
    }

    #[test]
    fn test_envelope_display_round_trip() {
        let parsed = Envelope::parse(KNOWN_ENVELOPE).unwrap();
        assert_eq!(parsed.iv[15], 0x0f);
        assert_eq!(parsed.to_string(), KNOWN_ENVELOPE);
    }

    #[test]
    fn test_free_decrypt_checks_shape_first() {
        assert!(matches!(
            decrypt("not-a-valid-envelope"),
            Err(MuatanError::MalformedEnvelope(_))
        ));
        assert!(matches!(decrypt(""), Err(MuatanError::MalformedEnvelope(_))));
    }

    proptest! {
        #[test]
        fn prop_round_trip(plaintext in any::<String>()) {
            let cipher = test_cipher();
            let envelope = cipher.encrypt(&plaintext).unwrap();
            prop_assert_eq!(cipher.decrypt(&envelope).unwrap(), plaintext);
        }
    }
}
