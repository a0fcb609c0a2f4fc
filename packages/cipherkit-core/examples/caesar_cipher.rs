//! # Caesar Cipher Demo
//!
//! Plugs a home-made cipher into the [`SymmetricCipher`] contract. Anything
//! written against the contract, such as [`ObjectCipher`], works with it
//! unchanged.
//!
//! Not a real cipher. Do not use it for anything but this demo.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example caesar_cipher
//! ```

use cipherkit_core::cipher::{ObjectCipher, SymmetricCipher};
use cipherkit_core::key::{Key, SymmetricKey};
use cipherkit_core::serialization::{JsonCodec, MessageConverter};
use cipherkit_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Shifts every character by a fixed offset
struct CaesarKey {
    offset: u32,
}

impl Key for CaesarKey {
    fn name(&self) -> &str {
        ""
    }
}

impl SymmetricKey for CaesarKey {}

struct CaesarCipher;

impl CaesarCipher {
    fn shift(text: &str, shift: impl Fn(u32) -> Option<u32>) -> Option<String> {
        text.chars()
            .map(|c| shift(c as u32).and_then(char::from_u32))
            .collect()
    }
}

impl SymmetricCipher for CaesarCipher {
    type Key = CaesarKey;
    type Message = String;

    fn encrypt(&self, key: &CaesarKey, message: &String) -> Result<String> {
        Self::shift(message, |c| c.checked_add(key.offset))
            .ok_or_else(|| Error::EncryptionFailed("shifted past the last character".into()))
    }

    fn decrypt(&self, key: &CaesarKey, message: &String) -> Result<String> {
        Self::shift(message, |c| c.checked_sub(key.offset))
            .ok_or_else(|| Error::DecryptionFailed("shifted before the first character".into()))
    }
}

/// Bytes of JSON text, shifted as text
struct ShiftedJson;

impl MessageConverter<serde_json::Value, String> for ShiftedJson {
    fn to_message(&self, repr: serde_json::Value) -> Result<String> {
        Ok(repr.to_string())
    }

    fn from_message(&self, message: String) -> Result<serde_json::Value> {
        serde_json::from_str(&message).map_err(|e| Error::ConversionError(e.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Note {
    to: String,
    body: String,
}

fn main() -> Result<()> {
    println!("=== Cipherkit Core: Caesar Cipher Demo ===\n");

    let cipher = CaesarCipher;
    let key = CaesarKey { offset: 3 };

    println!("Step 1: Shifting \"HELLO\" by {}...", key.offset);
    let encrypted = cipher.encrypt(&key, &"HELLO".to_string())?;
    println!("  Encrypted: {}", encrypted);
    println!("  Decrypted: {}", cipher.decrypt(&key, &encrypted)?);
    println!();

    println!("Step 2: Encrypting a whole object through the same cipher...");
    let objects = ObjectCipher::new(CaesarCipher, JsonCodec, ShiftedJson);
    let note = Note {
        to: "Bob".into(),
        body: "Meet at noon".into(),
    };
    let sealed = objects.encrypt(&key, &note)?;
    println!("  Encrypted: {}", sealed);
    let opened: Note = objects.decrypt(&key, &sealed)?;
    println!("  Decrypted: {:?}", opened);

    println!("\n=== Demo Complete ===");
    Ok(())
}
