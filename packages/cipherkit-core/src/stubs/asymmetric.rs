use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EncryptedObject, Payload};
use crate::cipher::AsymmetricCipher;
use crate::error::{Error, Result};
use crate::key::{
    AsymmetricKey, ByteKeyConverter, Key, KeyPair, KeyPairGenerator, PrivateKey, PublicKey,
};

const PUBLIC_PREFIX: &str = "PU_";
const PRIVATE_PREFIX: &str = "PR_";

fn check_owner(owner: String) -> Result<String> {
    if owner.trim().is_empty() {
        return Err(Error::InvalidKeyName("Owner cannot be empty".into()));
    }
    Ok(owner)
}

/// Public half of a dummy key pair, named `PU_<owner>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DummyPublicKey {
    owner: String,
    name: String,
}

/// Private half of a dummy key pair, named `PR_<owner>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DummyPrivateKey {
    owner: String,
    name: String,
}

impl DummyPublicKey {
    /// Create the public key of `owner`; fails on a blank owner
    pub fn new(owner: impl Into<String>) -> Result<Self> {
        let owner = check_owner(owner.into())?;
        Ok(Self {
            name: format!("{}{}", PUBLIC_PREFIX, owner),
            owner,
        })
    }

    /// The owner this key was made for
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl DummyPrivateKey {
    /// Create the private key of `owner`; fails on a blank owner
    pub fn new(owner: impl Into<String>) -> Result<Self> {
        let owner = check_owner(owner.into())?;
        Ok(Self {
            name: format!("{}{}", PRIVATE_PREFIX, owner),
            owner,
        })
    }

    /// The owner this key was made for
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl Key for DummyPublicKey {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PublicKey for DummyPublicKey {}

impl Key for DummyPrivateKey {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PrivateKey for DummyPrivateKey {}

impl fmt::Display for DummyPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for DummyPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// Serialized as the owner alone; the name is derived.

impl TryFrom<String> for DummyPublicKey {
    type Error = Error;

    fn try_from(owner: String) -> Result<Self> {
        Self::new(owner)
    }
}

impl From<DummyPublicKey> for String {
    fn from(key: DummyPublicKey) -> Self {
        key.owner
    }
}

impl TryFrom<String> for DummyPrivateKey {
    type Error = Error;

    fn try_from(owner: String) -> Result<Self> {
        Self::new(owner)
    }
}

impl From<DummyPrivateKey> for String {
    fn from(key: DummyPrivateKey) -> Self {
        key.owner
    }
}

/// Whether two key names are the opposite halves of one owner's pair
fn same_pair(a: &str, b: &str) -> bool {
    let halves = |x: &str, y: &str| {
        match (x.strip_prefix(PUBLIC_PREFIX), y.strip_prefix(PRIVATE_PREFIX)) {
            (Some(pu), Some(pr)) => pu == pr,
            _ => false,
        }
    };
    halves(a, b) || halves(b, a)
}

/// Generator for dummy key pairs; both halves share the owner
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyKeyPairGenerator;

impl KeyPairGenerator for DummyKeyPairGenerator {
    type PublicKey = DummyPublicKey;
    type PrivateKey = DummyPrivateKey;

    fn generate_named_key_pair(
        &mut self,
        owner: &str,
    ) -> Result<KeyPair<DummyPublicKey, DummyPrivateKey>> {
        Ok(KeyPair::new(
            Some(DummyPublicKey::new(owner)?),
            Some(DummyPrivateKey::new(owner)?),
        ))
    }
}

/// Stand-in asymmetric cipher that wraps values with the key name
///
/// A value wrapped by `PU_x` is unwrapped only by `PR_x`, and the other way
/// round.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyAsymmetricCipher;

impl DummyAsymmetricCipher {
    /// Create the cipher
    pub fn new() -> Self {
        Self
    }

    /// Key pair generator matching this cipher
    pub fn generator() -> DummyKeyPairGenerator {
        DummyKeyPairGenerator
    }

    fn seal(key: &impl Key, message: &Payload) -> Payload {
        EncryptedObject::new(key.name(), message.clone()).into()
    }

    fn open(key: &impl Key, message: &Payload) -> Result<Payload> {
        let wrapped = message
            .as_encrypted()
            .ok_or_else(|| Error::InvalidCiphertext("Invalid input object type".into()))?;
        if !same_pair(key.name(), wrapped.key_name()) {
            return Err(Error::DecryptionFailed("Cannot decrypt object".into()));
        }
        Ok(wrapped.object().clone())
    }
}

impl fmt::Display for DummyAsymmetricCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dummy")
    }
}

impl AsymmetricCipher for DummyAsymmetricCipher {
    type PublicKey = DummyPublicKey;
    type PrivateKey = DummyPrivateKey;
    type Message = Payload;

    fn encrypt_with_public(&self, key: &DummyPublicKey, message: &Payload) -> Result<Payload> {
        Ok(Self::seal(key, message))
    }

    fn encrypt_with_private(&self, key: &DummyPrivateKey, message: &Payload) -> Result<Payload> {
        Ok(Self::seal(key, message))
    }

    fn decrypt_with_public(&self, key: &DummyPublicKey, message: &Payload) -> Result<Payload> {
        Self::open(key, message)
    }

    fn decrypt_with_private(&self, key: &DummyPrivateKey, message: &Payload) -> Result<Payload> {
        Self::open(key, message)
    }
}

/// Encodes either half of a dummy pair as the UTF-8 bytes of its name
///
/// The `PU_`/`PR_` prefix decides which half comes back.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyAsymmetricKeyConverter;

impl ByteKeyConverter for DummyAsymmetricKeyConverter {
    type Key = AsymmetricKey<DummyPublicKey, DummyPrivateKey>;

    fn to_bytes(&self, key: &Self::Key) -> Result<Vec<u8>> {
        Ok(key.name().as_bytes().to_vec())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<Self::Key> {
        let name = std::str::from_utf8(bytes)
            .map_err(|e| Error::InvalidKey(format!("Key name is not UTF-8: {}", e)))?;
        if let Some(owner) = name.strip_prefix(PUBLIC_PREFIX) {
            Ok(AsymmetricKey::Public(DummyPublicKey::new(owner)?))
        } else if let Some(owner) = name.strip_prefix(PRIVATE_PREFIX) {
            Ok(AsymmetricKey::Private(DummyPrivateKey::new(owner)?))
        } else {
            Err(Error::InvalidKey(format!("Not a dummy key name: {:?}", name)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(owner: &str) -> (DummyPublicKey, DummyPrivateKey) {
        let (public, private) = DummyAsymmetricCipher::generator()
            .generate_named_key_pair(owner)
            .unwrap()
            .into_parts();
        (public.unwrap(), private.unwrap())
    }

    #[test]
    fn test_key_names() {
        let (public, private) = pair("alice");
        assert_eq!(public.name(), "PU_alice");
        assert_eq!(private.name(), "PR_alice");
        assert_eq!(public.owner(), "alice");
    }

    #[test]
    fn test_blank_owner_rejected() {
        assert!(DummyPublicKey::new("").is_err());
        assert!(DummyPrivateKey::new(" ").is_err());
        assert!(DummyAsymmetricCipher::generator().generate_key_pair().is_err());
    }

    #[test]
    fn test_public_encrypt_private_decrypt() {
        let (public, private) = pair("alice");
        let encrypted = DummyAsymmetricCipher
            .encrypt_with_public(&public, &"abc".into())
            .unwrap();
        assert_eq!(encrypted.to_string(), "E[PU_alice,abc]");

        let decrypted = DummyAsymmetricCipher
            .decrypt_with_private(&private, &encrypted)
            .unwrap();
        assert_eq!(decrypted, Payload::from("abc"));
    }

    #[test]
    fn test_private_encrypt_public_decrypt() {
        let (public, private) = pair("alice");
        let encrypted = DummyAsymmetricCipher
            .encrypt_with_private(&private, &"abc".into())
            .unwrap();
        let decrypted = DummyAsymmetricCipher
            .decrypt_with_public(&public, &encrypted)
            .unwrap();
        assert_eq!(decrypted, Payload::from("abc"));
    }

    #[test]
    fn test_same_half_cannot_decrypt() {
        let (public, _) = pair("alice");
        let encrypted = DummyAsymmetricCipher
            .encrypt_with_public(&public, &"abc".into())
            .unwrap();
        let err = DummyAsymmetricCipher
            .decrypt_with_public(&public, &encrypted)
            .unwrap_err();
        assert!(matches!(err, Error::DecryptionFailed(_)));
    }

    #[test]
    fn test_other_owner_cannot_decrypt() {
        let (public, _) = pair("alice");
        let (_, private) = pair("bob");
        let encrypted = DummyAsymmetricCipher
            .encrypt_with_public(&public, &"abc".into())
            .unwrap();
        assert!(DummyAsymmetricCipher
            .decrypt_with_private(&private, &encrypted)
            .is_err());
    }

    #[test]
    fn test_plain_value_rejected() {
        let (_, private) = pair("alice");
        let err = DummyAsymmetricCipher
            .decrypt_with_private(&private, &"abc".into())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCiphertext(_)));
    }

    #[test]
    fn test_same_pair() {
        assert!(same_pair("PU_a", "PR_a"));
        assert!(same_pair("PR_a", "PU_a"));
        assert!(!same_pair("PU_a", "PU_a"));
        assert!(!same_pair("PU_a", "PR_b"));
        assert!(!same_pair("a", "a"));
    }

    #[test]
    fn test_converter() {
        let (public, private) = pair("carl");
        let converter = DummyAsymmetricKeyConverter;

        let bytes = converter.to_bytes(&AsymmetricKey::Public(public.clone())).unwrap();
        assert_eq!(bytes, b"PU_carl");
        assert_eq!(converter.from_bytes(&bytes).unwrap(), AsymmetricKey::Public(public));

        let bytes = converter.to_bytes(&AsymmetricKey::Private(private.clone())).unwrap();
        assert_eq!(converter.from_bytes(&bytes).unwrap(), AsymmetricKey::Private(private));

        assert!(converter.from_bytes(b"XX_carl").is_err());
        assert!(converter.from_bytes(b"PU_").is_err());
    }
}
