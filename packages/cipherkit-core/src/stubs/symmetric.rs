use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EncryptedObject, Payload};
use crate::cipher::SymmetricCipher;
use crate::error::{Error, Result};
use crate::key::{ByteKeyConverter, Key, KeyGenerator, SymmetricKey};

/// A symmetric key that is nothing but a mandatory name
///
/// Two keys are equal when their names are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DummySymmetricKey {
    name: String,
}

impl DummySymmetricKey {
    /// Create a key; fails on a blank name
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidKeyName("This key must be given a name".into()));
        }
        Ok(Self { name })
    }
}

impl Key for DummySymmetricKey {
    fn name(&self) -> &str {
        &self.name
    }
}

impl SymmetricKey for DummySymmetricKey {}

impl fmt::Display for DummySymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for DummySymmetricKey {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<DummySymmetricKey> for String {
    fn from(key: DummySymmetricKey) -> Self {
        key.name
    }
}

/// Generator for [`DummySymmetricKey`]
///
/// Unnamed generation always fails, since dummy keys need a name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyKeyGenerator;

impl KeyGenerator for DummyKeyGenerator {
    type Key = DummySymmetricKey;

    fn generate_named_key(&mut self, name: &str) -> Result<DummySymmetricKey> {
        DummySymmetricKey::new(name)
    }
}

/// Stand-in symmetric cipher that wraps values with the key name
///
/// `encrypt(k, m)` gives `E[k,m]`; only a key with the same name unwraps it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummySymmetricCipher;

impl DummySymmetricCipher {
    /// Create the cipher
    pub fn new() -> Self {
        Self
    }

    /// Key generator matching this cipher
    pub fn generator() -> DummyKeyGenerator {
        DummyKeyGenerator
    }
}

impl fmt::Display for DummySymmetricCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dummy")
    }
}

impl SymmetricCipher for DummySymmetricCipher {
    type Key = DummySymmetricKey;
    type Message = Payload;

    fn encrypt(&self, key: &DummySymmetricKey, message: &Payload) -> Result<Payload> {
        Ok(EncryptedObject::new(key.name(), message.clone()).into())
    }

    fn decrypt(&self, key: &DummySymmetricKey, message: &Payload) -> Result<Payload> {
        let wrapped = message
            .as_encrypted()
            .ok_or_else(|| Error::InvalidCiphertext("Invalid input object type".into()))?;
        if wrapped.key_name() != key.name() {
            return Err(Error::DecryptionFailed("Cannot decrypt object".into()));
        }
        Ok(wrapped.object().clone())
    }
}

/// Encodes a [`DummySymmetricKey`] as the UTF-8 bytes of its name
#[derive(Debug, Clone, Copy, Default)]
pub struct DummySymmetricKeyConverter;

impl ByteKeyConverter for DummySymmetricKeyConverter {
    type Key = DummySymmetricKey;

    fn to_bytes(&self, key: &DummySymmetricKey) -> Result<Vec<u8>> {
        Ok(key.name.as_bytes().to_vec())
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<DummySymmetricKey> {
        let name = std::str::from_utf8(bytes)
            .map_err(|e| Error::InvalidKey(format!("Key name is not UTF-8: {}", e)))?;
        DummySymmetricKey::new(name)
    }
}
