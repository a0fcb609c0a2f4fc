//! # AES-256-GCM
//!
//! The byte-level symmetric cipher.
//!
//! ## Ciphertext Layout
//!
//! ```text
//! ┌──────────────────┬───────────────────────────────┬──────────────────┐
//! │  nonce (12 B)    │  ciphertext (len(plaintext))  │   tag (16 B)     │
//! └──────────────────┴───────────────────────────────┴──────────────────┘
//! ```
//!
//! A fresh random nonce is drawn from the OS for every message, so
//! encrypting the same plaintext twice gives different ciphertexts. The
//! authentication tag makes decryption under the wrong key, or of tampered
//! bytes, fail instead of producing garbage.
//!
//! ## Critical Security Requirement
//!
//! **NEVER reuse a nonce with the same key!** Random 96-bit nonces are safe
//! for up to 2^32 messages per key.

use std::fmt;

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce as AesNonce,
};
use rand::rngs::OsRng;
use rand::RngCore;
use rand_core::CryptoRngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use super::SymmetricCipher;
use crate::error::{Error, Result};
use crate::key::{ByteKeyConverter, Key, KeyGenerator, SymmetricKey};

/// Size of an AES-256 key in bytes
pub const AES_KEY_SIZE: usize = 32;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
const TAG_SIZE: usize = 16;

// ============================================================================
// KEY
// ============================================================================

/// A 256-bit AES key
///
/// Key material is zeroized on drop. Equality compares material only; the
/// name is metadata.
#[derive(Clone)]
pub struct AesKey {
    name: String,
    material: Zeroizing<[u8; AES_KEY_SIZE]>,
}

impl AesKey {
    /// Build a key from raw material
    pub fn from_bytes(name: impl Into<String>, material: [u8; AES_KEY_SIZE]) -> Self {
        Self::from_zeroizing(name, Zeroizing::new(material))
    }

    /// Build a key from material already held in a wiping buffer
    pub fn from_zeroizing(
        name: impl Into<String>,
        material: Zeroizing<[u8; AES_KEY_SIZE]>,
    ) -> Self {
        Self {
            name: name.into(),
            material,
        }
    }

    /// Copy `bytes` into a wiping buffer, if it has the key length
    fn material_from_slice(bytes: &[u8]) -> Option<Zeroizing<[u8; AES_KEY_SIZE]>> {
        if bytes.len() != AES_KEY_SIZE {
            return None;
        }
        let mut material = Zeroizing::new([0u8; AES_KEY_SIZE]);
        material.copy_from_slice(bytes);
        Some(material)
    }

    /// Raw key material
    ///
    /// ## Security Warning
    ///
    /// Only use this for secure storage. Never log or transmit these bytes.
    pub fn as_bytes(&self) -> &[u8; AES_KEY_SIZE] {
        &self.material
    }
}

impl Key for AesKey {
    fn name(&self) -> &str {
        &self.name
    }
}

impl SymmetricKey for AesKey {}

impl PartialEq for AesKey {
    fn eq(&self, other: &Self) -> bool {
        *self.material == *other.material
    }
}

impl Eq for AesKey {}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesKey")
            .field("name", &self.name)
            .field("material", &"<redacted>")
            .finish()
    }
}

/// Serialized form: `{ "name": ..., "key": "<hex>" }`
#[derive(Serialize, Deserialize)]
struct AesKeyRepr {
    name: String,
    key: String,
}

impl Serialize for AesKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        AesKeyRepr {
            name: self.name.clone(),
            key: hex::encode(*self.material),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AesKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = AesKeyRepr::deserialize(deserializer)?;
        let bytes = Zeroizing::new(hex::decode(&repr.key).map_err(serde::de::Error::custom)?);
        let material = AesKey::material_from_slice(&bytes)
            .ok_or_else(|| serde::de::Error::custom("AES key must be 32 bytes"))?;
        Ok(AesKey::from_zeroizing(repr.name, material))
    }
}

// ============================================================================
// GENERATOR
// ============================================================================

/// Generates AES-256 keys from a pluggable random source
///
/// Defaults to the OS generator; pass a [`SeededRng`](crate::util::SeededRng)
/// for reproducible keys.
#[derive(Debug, Clone)]
pub struct AesKeyGenerator<R = OsRng> {
    rng: R,
}

impl AesKeyGenerator<OsRng> {
    /// Generator drawing from the OS
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for AesKeyGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CryptoRngCore> AesKeyGenerator<R> {
    /// Generator drawing from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: CryptoRngCore> KeyGenerator for AesKeyGenerator<R> {
    type Key = AesKey;

    fn generate_named_key(&mut self, name: &str) -> Result<AesKey> {
        let mut material = Zeroizing::new([0u8; AES_KEY_SIZE]);
        self.rng
            .try_fill_bytes(&mut material[..])
            .map_err(|e| Error::KeyGenerationFailed(format!("Random source failed: {}", e)))?;

        tracing::debug!(name, "Generated AES-256 key");
        Ok(AesKey::from_zeroizing(name, material))
    }
}

// ============================================================================
// CONVERTER
// ============================================================================

/// Encodes an [`AesKey`] as its 32 raw bytes
///
/// The key name is not part of the encoding; decoded keys are unnamed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesKeyConverter;

impl ByteKeyConverter for AesKeyConverter {
    type Key = AesKey;

    fn to_bytes(&self, key: &AesKey) -> Result<Vec<u8>> {
        Ok(key.as_bytes().to_vec())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<AesKey> {
        let material = AesKey::material_from_slice(bytes).ok_or_else(|| {
            Error::InvalidKey(format!(
                "AES-256 key must be {} bytes, got {}",
                AES_KEY_SIZE,
                bytes.len()
            ))
        })?;
        Ok(AesKey::from_zeroizing("", material))
    }
}

// ============================================================================
// CIPHER
// ============================================================================

/// AES-256 in GCM mode over byte strings
#[derive(Debug, Clone, Copy, Default)]
pub struct AesGcmCipher;

impl AesGcmCipher {
    /// Create the cipher
    pub fn new() -> Self {
        Self
    }
}

impl fmt::Display for AesGcmCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AES/GCM/NoPadding")
    }
}

impl SymmetricCipher for AesGcmCipher {
    type Key = AesKey;
    type Message = Vec<u8>;

    fn encrypt(&self, key: &AesKey, plaintext: &Vec<u8>) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| Error::EncryptionFailed(format!("Invalid key: {}", e)))?;

        let mut nonce = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce);

        let ciphertext = cipher
            .encrypt(AesNonce::from_slice(&nonce), plaintext.as_slice())
            .map_err(|e| Error::EncryptionFailed(format!("Encryption failed: {}", e)))?;

        let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn decrypt(&self, key: &AesKey, message: &Vec<u8>) -> Result<Vec<u8>> {
        if message.len() < NONCE_SIZE + TAG_SIZE {
            return Err(Error::InvalidCiphertext(format!(
                "AES-GCM ciphertext must be at least {} bytes, got {}",
                NONCE_SIZE + TAG_SIZE,
                message.len()
            )));
        }

        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| Error::DecryptionFailed(format!("Invalid key: {}", e)))?;
        let (nonce, ciphertext) = message.split_at(NONCE_SIZE);

        cipher
            .decrypt(AesNonce::from_slice(nonce), ciphertext)
            .map_err(|_| {
                tracing::debug!(key = key.name(), "AES-GCM authentication failed");
                Error::DecryptionFailed("Decryption failed: authentication tag mismatch".into())
            })
    }
}

// ============================================================================
// TESTS
// ============================================================================
