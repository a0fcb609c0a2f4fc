//! # AES Encryption Demo
//!
//! Generates an AES-256 key, encrypts a message, and decrypts it again. A
//! second key shows that decryption under the wrong key is refused.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example aes_encryption
//! ```

use cipherkit_core::cipher::{AesGcmCipher, AesKeyGenerator, SymmetricCipher, NONCE_SIZE};
use cipherkit_core::key::{Key, KeyGenerator};
use cipherkit_core::util::to_hex_string;

fn main() -> cipherkit_core::Result<()> {
    println!("=== Cipherkit Core: AES Encryption Demo ===\n");

    let cipher = AesGcmCipher::new();
    let mut generator = AesKeyGenerator::new();

    println!("Step 1: Generating key 'k1'...");
    let key = generator.generate_named_key("k1")?;
    println!("  Key name: {}", key.name());
    println!("  Cipher:   {}", cipher);
    println!();

    println!("Step 2: Encrypting \"Hello world\"...");
    let encrypted = cipher.encrypt(&key, &b"Hello world".to_vec())?;
    println!("  Nonce:      {}", to_hex_string(&encrypted[..NONCE_SIZE]));
    println!("  Ciphertext: {}", to_hex_string(&encrypted[NONCE_SIZE..]));
    println!();

    println!("Step 3: Decrypting with 'k1'...");
    let decrypted = cipher.decrypt(&key, &encrypted)?;
    println!("  Plaintext: {}", String::from_utf8_lossy(&decrypted));
    println!();

    println!("Step 4: Decrypting with another key...");
    let other = generator.generate_named_key("k2")?;
    match cipher.decrypt(&other, &encrypted) {
        Ok(_) => println!("  Unexpectedly decrypted!"),
        Err(e) => println!("  Refused: {} (code {})", e, e.code()),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
