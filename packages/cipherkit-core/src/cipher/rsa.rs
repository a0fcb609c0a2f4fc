//! # RSA with PKCS#1 v1.5 Padding
//!
//! The byte-level asymmetric cipher. Both directions are supported:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         RSA DIRECTIONS                                  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Confidentiality                     Origin binding                     │
//! │  ───────────────                     ──────────────                     │
//! │  encrypt_with_public                 encrypt_with_private               │
//! │    type-2 padding (random)             type-1 padding (00 01 FF.. 00)   │
//! │    m^e mod n                           m^d mod n                        │
//! │  decrypt_with_private                decrypt_with_public                │
//! │    c^d mod n, strip type 2             c^e mod n, strip type 1          │
//! │                                                                         │
//! │  Plaintext limit: k - 11 bytes, k = modulus size in bytes.              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Encodings
//!
//! | Key | Byte form | Converter |
//! |-----|-----------|-----------|
//! | public | SPKI DER | [`RsaPublicKeyConverter`] |
//! | private | PKCS#8 DER | [`RsaPrivateKeyConverter`] |

use std::fmt;

use ::rsa::traits::PublicKeyParts;
use ::rsa::{BigUint, Pkcs1v15Encrypt, Pkcs1v15Sign};
use base64::{engine::general_purpose, Engine as _};
use pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rand::rngs::OsRng;
use rand_core::CryptoRngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use super::AsymmetricCipher;
use crate::error::{Error, Result};
use crate::key::{ByteKeyConverter, Key, KeyPair, KeyPairGenerator, PrivateKey, PublicKey};

/// Default modulus size in bits
pub const DEFAULT_RSA_KEY_BITS: usize = 1024;

/// Minimum number of 0xFF bytes in type-1 padding
const MIN_PADDING_LEN: usize = 8;

// ============================================================================
// KEYS
// ============================================================================

/// The public half of an RSA key pair
#[derive(Clone)]
pub struct RsaPublicKey {
    name: String,
    inner: ::rsa::RsaPublicKey,
}

/// The private half of an RSA key pair
#[derive(Clone)]
pub struct RsaPrivateKey {
    name: String,
    inner: ::rsa::RsaPrivateKey,
}

impl RsaPublicKey {
    /// Wrap an `rsa` public key
    pub fn new(name: impl Into<String>, inner: ::rsa::RsaPublicKey) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    /// Modulus size in bytes
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// The wrapped `rsa` key
    pub fn as_inner(&self) -> &::rsa::RsaPublicKey {
        &self.inner
    }

    /// SPKI DER encoding
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let der = self
            .inner
            .to_public_key_der()
            .map_err(|e| Error::InvalidKey(format!("Failed to encode RSA public key: {}", e)))?;
        Ok(der.as_bytes().to_vec())
    }

    /// Decode an SPKI DER public key
    pub fn from_der(name: impl Into<String>, der: &[u8]) -> Result<Self> {
        let inner = ::rsa::RsaPublicKey::from_public_key_der(der)
            .map_err(|e| Error::InvalidKey(format!("Invalid RSA public key: {}", e)))?;
        Ok(Self::new(name, inner))
    }
}

impl RsaPrivateKey {
    /// Wrap an `rsa` private key
    pub fn new(name: impl Into<String>, inner: ::rsa::RsaPrivateKey) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    /// Modulus size in bytes
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// The matching public key, carrying the same name
    pub fn to_public_key(&self) -> RsaPublicKey {
        RsaPublicKey::new(self.name.clone(), self.inner.to_public_key())
    }

    /// The wrapped `rsa` key
    pub fn as_inner(&self) -> &::rsa::RsaPrivateKey {
        &self.inner
    }

    /// PKCS#8 DER encoding
    ///
    /// ## Security Warning
    ///
    /// The returned bytes are the private key. Only use this for secure
    /// storage.
    pub fn to_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        let der = self
            .inner
            .to_pkcs8_der()
            .map_err(|e| Error::InvalidKey(format!("Failed to encode RSA private key: {}", e)))?;
        Ok(Zeroizing::new(der.as_bytes().to_vec()))
    }

    /// Decode a PKCS#8 DER private key
    pub fn from_der(name: impl Into<String>, der: &[u8]) -> Result<Self> {
        let inner = ::rsa::RsaPrivateKey::from_pkcs8_der(der)
            .map_err(|e| Error::InvalidKey(format!("Invalid RSA private key: {}", e)))?;
        Ok(Self::new(name, inner))
    }
}

impl Key for RsaPublicKey {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PublicKey for RsaPublicKey {}

impl Key for RsaPrivateKey {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PrivateKey for RsaPrivateKey {}

impl PartialEq for RsaPublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for RsaPublicKey {}

impl PartialEq for RsaPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for RsaPrivateKey {}

impl fmt::Debug for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPublicKey")
            .field("name", &self.name)
            .field("bits", &(self.inner.size() * 8))
            .finish()
    }
}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("name", &self.name)
            .field("bits", &(self.inner.size() * 8))
            .finish_non_exhaustive()
    }
}

/// Serialized form: `{ "name": ..., "der": "<base64>" }`
#[derive(Serialize, Deserialize)]
struct RsaKeyRepr {
    name: String,
    der: String,
}

impl Serialize for RsaPublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let der = self.to_der().map_err(serde::ser::Error::custom)?;
        RsaKeyRepr {
            name: self.name.clone(),
            der: general_purpose::STANDARD.encode(der),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RsaPublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = RsaKeyRepr::deserialize(deserializer)?;
        let der = general_purpose::STANDARD
            .decode(&repr.der)
            .map_err(serde::de::Error::custom)?;
        RsaPublicKey::from_der(repr.name, &der).map_err(serde::de::Error::custom)
    }
}

impl Serialize for RsaPrivateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let der = self.to_der().map_err(serde::ser::Error::custom)?;
        RsaKeyRepr {
            name: self.name.clone(),
            der: general_purpose::STANDARD.encode(der.as_slice()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RsaPrivateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = RsaKeyRepr::deserialize(deserializer)?;
        let der = Zeroizing::new(
            general_purpose::STANDARD
                .decode(&repr.der)
                .map_err(serde::de::Error::custom)?,
        );
        RsaPrivateKey::from_der(repr.name, &der).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// GENERATOR
// ============================================================================

/// Generates RSA key pairs of a fixed modulus size
#[derive(Debug, Clone)]
pub struct RsaKeyPairGenerator<R = OsRng> {
    bits: usize,
    rng: R,
}

impl RsaKeyPairGenerator<OsRng> {
    /// Generator for `bits`-bit moduli drawing from the OS
    pub fn new(bits: usize) -> Self {
        Self { bits, rng: OsRng }
    }
}

impl Default for RsaKeyPairGenerator<OsRng> {
    fn default() -> Self {
        Self::new(DEFAULT_RSA_KEY_BITS)
    }
}

impl<R: CryptoRngCore> RsaKeyPairGenerator<R> {
    /// Generator for `bits`-bit moduli drawing from `rng`
    pub fn with_rng(bits: usize, rng: R) -> Self {
        Self { bits, rng }
    }

    /// Modulus size in bits
    pub fn bits(&self) -> usize {
        self.bits
    }
}

impl<R: CryptoRngCore> KeyPairGenerator for RsaKeyPairGenerator<R> {
    type PublicKey = RsaPublicKey;
    type PrivateKey = RsaPrivateKey;

    /// Both halves carry `name`
    fn generate_named_key_pair(
        &mut self,
        name: &str,
    ) -> Result<KeyPair<RsaPublicKey, RsaPrivateKey>> {
        let inner = ::rsa::RsaPrivateKey::new(&mut self.rng, self.bits).map_err(|e| {
            Error::KeyGenerationFailed(format!("Failed to generate RSA key: {}", e))
        })?;
        let private = RsaPrivateKey::new(name, inner);
        let public = private.to_public_key();

        tracing::debug!(name, bits = self.bits, "Generated RSA key pair");
        Ok(KeyPair::new(Some(public), Some(private)))
    }
}

// ============================================================================
// CONVERTERS
// ============================================================================

/// Encodes an [`RsaPublicKey`] as SPKI DER
#[derive(Debug, Clone, Copy, Default)]
pub struct RsaPublicKeyConverter;

impl ByteKeyConverter for RsaPublicKeyConverter {
    type Key = RsaPublicKey;

    fn to_bytes(&self, key: &RsaPublicKey) -> Result<Vec<u8>> {
        key.to_der()
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<RsaPublicKey> {
        RsaPublicKey::from_der("", bytes)
    }
}

/// Encodes an [`RsaPrivateKey`] as PKCS#8 DER
#[derive(Debug, Clone, Copy, Default)]
pub struct RsaPrivateKeyConverter;

impl ByteKeyConverter for RsaPrivateKeyConverter {
    type Key = RsaPrivateKey;

    fn to_bytes(&self, key: &RsaPrivateKey) -> Result<Vec<u8>> {
        Ok(key.to_der()?.to_vec())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<RsaPrivateKey> {
        RsaPrivateKey::from_der("", bytes)
    }
}

// ============================================================================
// CIPHER
// ============================================================================

/// RSA over byte strings with PKCS#1 v1.5 padding
#[derive(Debug, Clone, Copy, Default)]
pub struct RsaCipher;

impl RsaCipher {
    /// Create the cipher
    pub fn new() -> Self {
        Self
    }
}

impl fmt::Display for RsaCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RSA/ECB/PKCS1Padding")
    }
}

impl AsymmetricCipher for RsaCipher {
    type PublicKey = RsaPublicKey;
    type PrivateKey = RsaPrivateKey;
    type Message = Vec<u8>;

    fn encrypt_with_public(&self, key: &RsaPublicKey, message: &Vec<u8>) -> Result<Vec<u8>> {
        key.inner
            .encrypt(&mut OsRng, Pkcs1v15Encrypt, message)
            .map_err(|e| Error::EncryptionFailed(format!("RSA encryption failed: {}", e)))
    }

    fn encrypt_with_private(&self, key: &RsaPrivateKey, message: &Vec<u8>) -> Result<Vec<u8>> {
        key.inner
            .sign(Pkcs1v15Sign::new_unprefixed(), message)
            .map_err(|e| Error::EncryptionFailed(format!("RSA encryption failed: {}", e)))
    }

    fn decrypt_with_public(&self, key: &RsaPublicKey, message: &Vec<u8>) -> Result<Vec<u8>> {
        let k = key.size();
        if message.len() != k {
            return Err(Error::InvalidCiphertext(format!(
                "RSA ciphertext must be {} bytes, got {}",
                k,
                message.len()
            )));
        }

        let c = BigUint::from_bytes_be(message);
        if &c >= key.inner.n() {
            return Err(Error::InvalidCiphertext(
                "RSA ciphertext out of range for modulus".into(),
            ));
        }

        let m = c.modpow(key.inner.e(), key.inner.n()).to_bytes_be();
        let mut em = vec![0u8; k - m.len()];
        em.extend_from_slice(&m);

        strip_type1_padding(&em).map(<[u8]>::to_vec).ok_or_else(|| {
            tracing::debug!(key = key.name(), "RSA type-1 padding check failed");
            Error::DecryptionFailed("Decryption failed: invalid padding".into())
        })
    }

    fn decrypt_with_private(&self, key: &RsaPrivateKey, message: &Vec<u8>) -> Result<Vec<u8>> {
        key.inner.decrypt(Pkcs1v15Encrypt, message).map_err(|_| {
            tracing::debug!(key = key.name(), "RSA type-2 padding check failed");
            Error::DecryptionFailed("Decryption failed: invalid padding".into())
        })
    }
}

/// Strip `00 01 FF.. 00` from an encoded block, returning the payload
fn strip_type1_padding(em: &[u8]) -> Option<&[u8]> {
    let rest = em.strip_prefix(&[0x00, 0x01])?;
    let separator = rest.iter().position(|&b| b != 0xFF)?;
    if separator < MIN_PADDING_LEN || rest[separator] != 0x00 {
        return None;
    }
    Some(&rest[separator + 1..])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::AsymmetricKey;
    use crate::util::SeededRng;

    fn key_pair(name: &str) -> (Option<RsaPublicKey>, Option<RsaPrivateKey>) {
        RsaKeyPairGenerator::new(DEFAULT_RSA_KEY_BITS)
            .generate_named_key_pair(name)
            .unwrap()
            .into_parts()
    }

    fn halves(name: &str) -> (RsaPublicKey, RsaPrivateKey) {
        let (public, private) = key_pair(name);
        (public.unwrap(), private.unwrap())
    }

    #[test]
    fn test_public_encrypt_private_decrypt() {
        let (public, private) = halves("k1");
        let plaintext = b"Hello world".to_vec();

        let encrypted = RsaCipher.encrypt_with_public(&public, &plaintext).unwrap();
        assert_ne!(encrypted, plaintext);
        assert_eq!(encrypted.len(), public.size());

        let decrypted = RsaCipher.decrypt_with_private(&private, &encrypted).unwrap();
        assert_eq!(decrypted, b"Hello world");
    }

    #[test]
    fn test_private_encrypt_public_decrypt() {
        let (public, private) = halves("k1");
        let plaintext = b"Hello world".to_vec();

        let encrypted = RsaCipher.encrypt_with_private(&private, &plaintext).unwrap();
        assert_ne!(encrypted, plaintext);

        let decrypted = RsaCipher.decrypt_with_public(&public, &encrypted).unwrap();
        assert_eq!(decrypted, b"Hello world");
    }

    #[test]
    fn test_dispatch_through_asymmetric_key() {
        let (public, private) = halves("alice");
        let plaintext = b"abc".to_vec();

        let encrypted = RsaCipher
            .encrypt(&AsymmetricKey::Public(public), &plaintext)
            .unwrap();
        let decrypted = RsaCipher
            .decrypt(&AsymmetricKey::Private(private), &encrypted)
            .unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_wrong_private_key_fails() {
        let (public, _) = halves("alice");
        let (_, other) = halves("bob");

        let encrypted = RsaCipher.encrypt_with_public(&public, &b"secret".to_vec()).unwrap();
        assert!(RsaCipher.decrypt_with_private(&other, &encrypted).is_err());
    }

    #[test]
    fn test_wrong_public_key_fails() {
        let (_, private) = halves("alice");
        let (other, _) = halves("bob");

        let encrypted = RsaCipher
            .encrypt_with_private(&private, &b"secret".to_vec())
            .unwrap();
        assert!(RsaCipher.decrypt_with_public(&other, &encrypted).is_err());
    }

    #[test]
    fn test_plaintext_is_not_a_ciphertext() {
        let (public, private) = halves("alice");
        let err = RsaCipher.decrypt_with_public(&public, &b"abc".to_vec()).unwrap_err();
        assert!(matches!(err, Error::InvalidCiphertext(_)));
        assert!(RsaCipher.decrypt_with_private(&private, &b"abc".to_vec()).is_err());
    }

    #[test]
    fn test_message_too_long() {
        let (public, private) = halves("alice");
        let message = vec![0u8; public.size() - 10];

        let err = RsaCipher.encrypt_with_public(&public, &message).unwrap_err();
        assert!(matches!(err, Error::EncryptionFailed(_)));
        assert!(RsaCipher.encrypt_with_private(&private, &message).is_err());
    }

    #[test]
    fn test_pair_names_and_matching_halves() {
        let (public, private) = halves("carl");
        assert_eq!(public.name(), "carl");
        assert_eq!(private.name(), "carl");
        assert_eq!(private.to_public_key(), public);
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let a = RsaKeyPairGenerator::with_rng(512, SeededRng::new(7))
            .generate_key_pair()
            .unwrap();
        let b = RsaKeyPairGenerator::with_rng(512, SeededRng::new(7))
            .generate_key_pair()
            .unwrap();
        assert_eq!(a.public_key(), b.public_key());
    }

    #[test]
    fn test_converters_round_trip_is_operational() {
        let (public, private) = halves("bob");
        let encrypted = RsaCipher.encrypt_with_public(&public, &b"Hello world".to_vec()).unwrap();

        let public_bytes = RsaPublicKeyConverter.to_bytes(&public).unwrap();
        let private_bytes = RsaPrivateKeyConverter.to_bytes(&private).unwrap();
        let restored_public = RsaPublicKeyConverter.from_bytes(&public_bytes).unwrap();
        let restored_private = RsaPrivateKeyConverter.from_bytes(&private_bytes).unwrap();

        assert_eq!(restored_public, public);
        assert_eq!(
            RsaCipher.decrypt_with_private(&restored_private, &encrypted).unwrap(),
            b"Hello world"
        );
    }

    #[test]
    fn test_converters_reject_wrong_kind() {
        let (public, private) = halves("bob");
        let public_bytes = RsaPublicKeyConverter.to_bytes(&public).unwrap();
        let private_bytes = RsaPrivateKeyConverter.to_bytes(&private).unwrap();

        assert!(matches!(
            RsaPrivateKeyConverter.from_bytes(&public_bytes),
            Err(Error::InvalidKey(_))
        ));
        assert!(matches!(
            RsaPublicKeyConverter.from_bytes(&private_bytes),
            Err(Error::InvalidKey(_))
        ));
        assert!(RsaPublicKeyConverter.from_bytes(b"garbage").is_err());
    }

    #[test]
    fn test_key_serde_round_trip() {
        let (public, private) = halves("dave");

        let json = serde_json::to_string(&public).unwrap();
        let restored: RsaPublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, public);
        assert_eq!(restored.name(), "dave");

        let json = serde_json::to_string(&private).unwrap();
        let restored: RsaPrivateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, private);
    }

    #[test]
    fn test_strip_type1_padding() {
        let mut em = vec![0x00, 0x01];
        em.extend_from_slice(&[0xFF; 8]);
        em.push(0x00);
        em.extend_from_slice(b"hi");
        assert_eq!(strip_type1_padding(&em), Some(&b"hi"[..]));

        let short = [0x00, 0x01, 0xFF, 0xFF, 0x00, b'h'];
        assert_eq!(strip_type1_padding(&short), None);

        let wrong_type = [0x00, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];
        assert_eq!(strip_type1_padding(&wrong_type), None);
    }
}
