//! # RSA Encryption Demo
//!
//! Generates an RSA key pair and walks both directions: public-encrypt for
//! confidentiality and private-encrypt for origin binding.
//!
//! ## Run
//!
//! ```bash
//! cargo run --release --example rsa_encryption
//! ```

use cipherkit_core::cipher::{AsymmetricCipher, RsaCipher};
use cipherkit_core::key::KeyPairGenerator;
use cipherkit_core::util::to_hex_string;
use cipherkit_core::{CryptoConfig, Error};

fn main() -> cipherkit_core::Result<()> {
    println!("=== Cipherkit Core: RSA Encryption Demo ===\n");

    let config = CryptoConfig::default();
    let cipher = RsaCipher::new();

    println!("Step 1: Generating a {}-bit key pair...", config.rsa_key_bits);
    let (public, private) = config
        .rsa_key_pair_generator()
        .generate_named_key_pair("alice")?
        .into_parts();
    let public = public.ok_or_else(|| Error::Internal("generator kept no public key".into()))?;
    let private = private.ok_or_else(|| Error::Internal("generator kept no private key".into()))?;
    println!("  Modulus size: {} bytes", public.size());
    println!();

    println!("Step 2: Encrypting \"Hello world\" with the public key...");
    let encrypted = cipher.encrypt_with_public(&public, &b"Hello world".to_vec())?;
    println!("  Ciphertext: {}", to_hex_string(&encrypted));
    let decrypted = cipher.decrypt_with_private(&private, &encrypted)?;
    println!("  Decrypted with private key: {}", String::from_utf8_lossy(&decrypted));
    println!();

    println!("Step 3: Encrypting \"from alice\" with the private key...");
    let signed = cipher.encrypt_with_private(&private, &b"from alice".to_vec())?;
    let opened = cipher.decrypt_with_public(&public, &signed)?;
    println!("  Decrypted with public key: {}", String::from_utf8_lossy(&opened));

    println!("\n=== Demo Complete ===");
    Ok(())
}
