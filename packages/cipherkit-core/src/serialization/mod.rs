//! # Object Serialization
//!
//! The print/read capability the object cipher adapters compose with a
//! message-level cipher.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        OBJECT CIPHER PIPELINE                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  encrypt:  object ──print──► Repr ──to_message──► M ──encrypt──► M'     │
//! │                                                                         │
//! │  decrypt:  M' ──decrypt──► M ──from_message──► Repr ──read──► object    │
//! │                                                                         │
//! │  ObjectCodec      : object <-> Repr   (JsonCodec, BincodeCodec)         │
//! │  MessageConverter : Repr   <-> M      (JsonBytes, Passthrough)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod converter;

pub use converter::{JsonBytes, MessageConverter, Passthrough};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Prints objects to an intermediate representation and reads them back
pub trait ObjectCodec {
    /// The intermediate representation
    type Repr;

    /// Serialize `value`
    fn print<T: Serialize + ?Sized>(&self, value: &T) -> Result<Self::Repr>;

    /// Deserialize a value of type `T`
    fn read<T: DeserializeOwned>(&self, repr: Self::Repr) -> Result<T>;
}

/// JSON values as the intermediate representation
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl ObjectCodec for JsonCodec {
    type Repr = serde_json::Value;

    fn print<T: Serialize + ?Sized>(&self, value: &T) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(value)?)
    }

    fn read<T: DeserializeOwned>(&self, repr: serde_json::Value) -> Result<T> {
        serde_json::from_value(repr).map_err(|e| Error::DeserializationError(e.to_string()))
    }
}

/// Compact bincode bytes as the intermediate representation
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl ObjectCodec for BincodeCodec {
    type Repr = Vec<u8>;

    fn print<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        Ok(bincode::serialize(value)?)
    }

    fn read<T: DeserializeOwned>(&self, repr: Vec<u8>) -> Result<T> {
        bincode::deserialize(&repr).map_err(|e| Error::DeserializationError(e.to_string()))
    }
}
