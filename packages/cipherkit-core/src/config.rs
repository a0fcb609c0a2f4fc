//! # Configuration
//!
//! One value that decides how generators, hashes and keychain storage are
//! built. Construct it once and pass it to whoever needs a generator; there
//! is no process-wide instance.
//!
//! ```json
//! {
//!   "rsa_key_bits": 2048,
//!   "short_hash_length": 8,
//!   "keychain_dir": "/var/lib/app/keys",
//!   "rng_seed": null
//! }
//! ```
//!
//! Every field is optional and falls back to its default.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cipher::{AesKeyGenerator, RsaKeyPairGenerator, DEFAULT_RSA_KEY_BITS};
use crate::error::{Error, Result};
use crate::hash::{ShortHashFunction, DEFAULT_SHORT_HASH_LENGTH};
use crate::storage::DirectoryStorage;
use crate::util::ConfiguredRng;

/// Smallest RSA modulus accepted, in bits
const MIN_RSA_KEY_BITS: usize = 512;

/// Library configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoConfig {
    /// Modulus size for RSA key pairs
    pub rsa_key_bits: usize,
    /// Width of short hashes in bytes
    pub short_hash_length: usize,
    /// Directory for keychain units (None: no directory storage)
    pub keychain_dir: Option<PathBuf>,
    /// Seed making key generation reproducible (None: OS randomness)
    ///
    /// For tests and demos only. Keys from a seeded generator are
    /// predictable.
    pub rng_seed: Option<u64>,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            rsa_key_bits: DEFAULT_RSA_KEY_BITS,
            short_hash_length: DEFAULT_SHORT_HASH_LENGTH,
            keychain_dir: None,
            rng_seed: None,
        }
    }
}

impl CryptoConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfig(format!("Malformed configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<()> {
        if self.rsa_key_bits < MIN_RSA_KEY_BITS || self.rsa_key_bits % 8 != 0 {
            return Err(Error::InvalidConfig(format!(
                "rsa_key_bits must be a multiple of 8 and at least {}, got {}",
                MIN_RSA_KEY_BITS, self.rsa_key_bits
            )));
        }
        if self.short_hash_length == 0 {
            return Err(Error::InvalidConfig(
                "short_hash_length must be positive".into(),
            ));
        }
        Ok(())
    }

    /// A fresh randomness source following `rng_seed`
    ///
    /// With a seed set, each call restarts the same stream.
    pub fn rng(&self) -> ConfiguredRng {
        ConfiguredRng::from_seed(self.rng_seed)
    }

    /// AES key generator drawing from [`rng`](Self::rng)
    pub fn aes_key_generator(&self) -> AesKeyGenerator<ConfiguredRng> {
        AesKeyGenerator::with_rng(self.rng())
    }

    /// RSA key pair generator for `rsa_key_bits`, drawing from
    /// [`rng`](Self::rng)
    pub fn rsa_key_pair_generator(&self) -> RsaKeyPairGenerator<ConfiguredRng> {
        RsaKeyPairGenerator::with_rng(self.rsa_key_bits, self.rng())
    }

    /// Truncate `inner` to `short_hash_length` bytes
    pub fn short_hash<H>(&self, inner: H) -> ShortHashFunction<H> {
        ShortHashFunction::with_length(inner, self.short_hash_length)
    }

    /// Directory storage rooted at `keychain_dir`
    pub fn keychain_storage(&self) -> Result<DirectoryStorage> {
        let dir = self
            .keychain_dir
            .as_ref()
            .ok_or_else(|| Error::InvalidConfig("keychain_dir is not set".into()))?;
        DirectoryStorage::open(dir)
    }
}

// ============================================================================
// TESTS
// ============================================================================
