use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::serialization::MessageConverter;
use crate::util::to_hex_string;

/// A value handled by the dummy ciphers
///
/// Plays the role of "any object" for the stand-in ciphers, which operate on
/// values rather than bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payload {
    /// A string
    Text(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// An integer
    Integer(i64),
    /// The output of a dummy encryption
    Encrypted(Box<EncryptedObject>),
}

impl Payload {
    /// Short name of the variant, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::Bytes(_) => "bytes",
            Payload::Integer(_) => "integer",
            Payload::Encrypted(_) => "encrypted object",
        }
    }

    /// The string, if this is a text payload
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The wrapper, if this is an encrypted payload
    pub fn as_encrypted(&self) -> Option<&EncryptedObject> {
        match self {
            Payload::Encrypted(object) => Some(object),
            _ => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Text(text) => f.write_str(text),
            Payload::Bytes(bytes) => f.write_str(&to_hex_string(bytes)),
            Payload::Integer(n) => write!(f, "{}", n),
            Payload::Encrypted(object) => write!(f, "{}", object),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<i64> for Payload {
    fn from(n: i64) -> Self {
        Payload::Integer(n)
    }
}

impl From<EncryptedObject> for Payload {
    fn from(object: EncryptedObject) -> Self {
        Payload::Encrypted(Box::new(object))
    }
}

/// A value "encrypted" by a dummy cipher: the key name next to the
/// untouched value
///
/// Only a cipher holding the matching key unwraps it. Two wrappers are equal
/// when both the key name and the value are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncryptedObject {
    key_name: String,
    object: Payload,
}

impl EncryptedObject {
    /// Wrap `object` under `key_name`
    pub fn new(key_name: impl Into<String>, object: Payload) -> Self {
        Self {
            key_name: key_name.into(),
            object,
        }
    }

    /// Name of the key that wrapped the value
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// The wrapped value
    pub fn object(&self) -> &Payload {
        &self.object
    }
}

impl fmt::Display for EncryptedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E[{},{}]", self.key_name, self.object)
    }
}

// ============================================================================
// OBJECT CIPHER CONVERTER
// ============================================================================

/// JSON values carried as [`Payload::Text`]
///
/// Lets an [`ObjectCipher`](crate::cipher::ObjectCipher) run over the dummy
/// ciphers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadText;

impl MessageConverter<serde_json::Value, Payload> for PayloadText {
    fn to_message(&self, repr: serde_json::Value) -> Result<Payload> {
        Ok(Payload::Text(repr.to_string()))
    }

    fn from_message(&self, message: Payload) -> Result<serde_json::Value> {
        match message {
            Payload::Text(text) => serde_json::from_str(&text)
                .map_err(|e| Error::ConversionError(format!("Payload is not JSON: {}", e))),
            other => Err(Error::ConversionError(format!(
                "Expected a text payload, got {}",
                other.kind()
            ))),
        }
    }
}
