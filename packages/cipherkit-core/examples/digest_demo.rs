//! # Digest Demo
//!
//! Computes message digests of a string, a short (truncated) hash, and a
//! crypt(3) password hash.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example digest_demo
//! ```

use cipherkit_core::hash::{CryptDigest, HashFunction, Md5Digest, Sha256Digest, Sha512Digest};
use cipherkit_core::util::to_hex_string;
use cipherkit_core::CryptoConfig;

fn main() -> cipherkit_core::Result<()> {
    println!("=== Cipherkit Core: Digest Demo ===\n");

    let input = "kwyjibo";
    println!("Input: {:?}\n", input);

    let md5 = Md5Digest::new();
    let sha256 = Sha256Digest::new();
    let sha512 = Sha512Digest::new();

    println!("  {:<8} {}", md5.algorithm(), to_hex_string(&md5.digest(input)?));
    println!("  {:<8} {}", sha256.algorithm(), to_hex_string(&sha256.digest(input)?));
    println!("  {:<8} {}", sha512.algorithm(), to_hex_string(&sha512.digest(input)?));
    println!();

    let config = CryptoConfig::default();
    let short = config.short_hash(Sha256Digest::new());
    println!(
        "Short hash ({} bytes of SHA-256): {}",
        short.length(),
        to_hex_string(&short.digest(input)?)
    );

    println!();

    let crypt = CryptDigest::new();
    let hashed = crypt.digest_with_salt(input, "$6$saltsalt")?;
    println!("crypt with salt $6$saltsalt: {}", hashed);
    println!("  verifies: {}", crypt.verify(input, &hashed));

    println!("\n=== Demo Complete ===");
    Ok(())
}
