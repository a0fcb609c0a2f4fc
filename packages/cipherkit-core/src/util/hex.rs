//! Hex rendering of byte strings (digests, ciphertexts) for display.

use crate::error::{Error, Result};

/// Render bytes as uppercase hex, two digits per byte
pub fn to_hex_string(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parse a hex string produced by [`to_hex_string`]
///
/// Either case is accepted. Odd lengths and non-hex digits are rejected.
pub fn from_hex_string(s: &str) -> Result<Vec<u8>> {
    hex::decode(s.trim()).map_err(|e| Error::ConversionError(format!("Invalid hex: {}", e)))
}
