//! # KeyChain Demo
//!
//! Builds a keychain for three people from a seeded generator, saves it to
//! a directory (one file per person), then loads it back with a fresh
//! handle and decrypts a message to Bob with the reloaded key.
//!
//! ## Run
//!
//! ```bash
//! RUST_LOG=cipherkit_core=debug cargo run --example keychain_demo
//! ```

use cipherkit_core::cipher::{AesGcmCipher, AesKey, AesKeyConverter, SymmetricCipher};
use cipherkit_core::key::KeyGenerator;
use cipherkit_core::storage::Storage;
use cipherkit_core::util::to_hex_string;
use cipherkit_core::{CryptoConfig, Error, KeyChain, KeyChainSerializer};
use tracing_subscriber::EnvFilter;

fn main() -> cipherkit_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Cipherkit Core: KeyChain Demo ===\n");

    let dir = tempfile::tempdir().map_err(|e| Error::Internal(e.to_string()))?;
    let config = CryptoConfig {
        keychain_dir: Some(dir.path().join("keychain")),
        rng_seed: Some(0),
        ..Default::default()
    };
    let serializer = KeyChainSerializer::new(AesKeyConverter);
    let cipher = AesGcmCipher::new();

    println!("Step 1: Generating keys for Alice, Bob and Carl (seed 0)...");
    let mut generator = config.aes_key_generator();
    let mut keychain: KeyChain<AesKey> = KeyChain::new();
    for person in ["Alice", "Bob", "Carl"] {
        keychain.add(person, generator.generate_named_key(person)?);
    }
    println!("  {} keys in the keychain", keychain.len());
    println!();

    println!("Step 2: Encrypting a message to Bob...");
    let bob = keychain
        .get_key("Bob")
        .ok_or_else(|| Error::Internal("Bob has no key".into()))?;
    let encrypted = cipher.encrypt(bob, &b"Hello world".to_vec())?;
    println!("  {}", to_hex_string(&encrypted));
    println!();

    println!("Step 3: Saving the keychain...");
    let mut storage = config.keychain_storage()?;
    serializer.save(&keychain, &mut storage)?;
    println!("  Directory: {}", storage.root().display());
    for unit in storage.list()? {
        println!("    {}", unit);
    }
    println!();

    println!("Step 4: Loading it back with a new handle...");
    let storage = config.keychain_storage()?;
    let mut reloaded: KeyChain<AesKey> = KeyChain::new();
    let count = serializer.load(&mut reloaded, &storage)?;
    println!("  Loaded {} keys", count);

    let bob = reloaded
        .get_key("Bob")
        .ok_or_else(|| Error::Internal("Bob's key was not reloaded".into()))?;
    let decrypted = cipher.decrypt(bob, &encrypted)?;
    println!("  Bob reads: {}", String::from_utf8_lossy(&decrypted));

    println!("\n=== Demo Complete ===");
    Ok(())
}
