use crate::error::{Error, Result};

/// Converts between a codec's representation `T` and a cipher's message `M`
pub trait MessageConverter<T, M> {
    /// Representation to message
    fn to_message(&self, repr: T) -> Result<M>;

    /// Message back to representation
    fn from_message(&self, message: M) -> Result<T>;
}

/// Identity conversion for codecs whose representation already is the
/// cipher's message type, e.g. bincode bytes into a byte cipher
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl<T> MessageConverter<T, T> for Passthrough {
    fn to_message(&self, repr: T) -> Result<T> {
        Ok(repr)
    }

    fn from_message(&self, message: T) -> Result<T> {
        Ok(message)
    }
}

/// JSON values carried as UTF-8 bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBytes;

impl MessageConverter<serde_json::Value, Vec<u8>> for JsonBytes {
    fn to_message(&self, repr: serde_json::Value) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&repr)?)
    }

    fn from_message(&self, message: Vec<u8>) -> Result<serde_json::Value> {
        serde_json::from_slice(&message)
            .map_err(|e| Error::ConversionError(format!("Message is not JSON: {}", e)))
    }
}
