//! # Cipherkit Core
//!
//! An algorithm-independent layer over cryptographic primitives. Calling
//! code says "encrypt this object with this key" or "look up Bob's key" and
//! the algorithm behind it (AES, RSA, SHA, or a readable stand-in) is picked
//! by whoever builds the cipher.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CIPHERKIT CORE MODULES                            │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌──────────────┐   │
//! │  │    Key      │  │   Cipher    │  │    Hash     │  │ Serialization│   │
//! │  │             │  │             │  │             │  │              │   │
//! │  │ - Contracts │  │ - Symmetric │  │ - Digests   │  │ - JSON       │   │
//! │  │ - Pairs     │  │ - Asymmetric│  │ - Truncation│  │ - bincode    │   │
//! │  │ - Generators│  │ - Object    │  │ - HashCode  │  │ - Converters │   │
//! │  │ - Converters│  │   adapters  │  │             │  │              │   │
//! │  └──────┬──────┘  └──────┬──────┘  └─────────────┘  └──────┬───────┘   │
//! │         │                └─────────────────┬───────────────┘           │
//! │         ▼                                  ▼                           │
//! │  ┌─────────────┐                  ┌─────────────────┐                  │
//! │  │  KeyChain   │──save/load──────►│    Storage      │                  │
//! │  │             │                  │                 │                  │
//! │  │ - Entities  │                  │ - Directory     │                  │
//! │  │ - Serializer│                  │ - Memory        │                  │
//! │  └─────────────┘                  └─────────────────┘                  │
//! │                                                                         │
//! │  Stubs: dummy hash and ciphers with readable outputs, for tests        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error type for the entire library
//! - [`config`] - Construction-time configuration
//! - [`key`] - Key contracts, pairs, generators and byte converters
//! - [`cipher`] - Cipher contracts, AES-GCM, RSA, no-op and object ciphers
//! - [`hash`] - Digest contract, message digests and truncation
//! - [`serialization`] - Object codecs for the object ciphers
//! - [`keychain`] - Entity-to-key maps and their persistence
//! - [`storage`] - Named byte units backing keychains
//! - [`stubs`] - Stand-in cryptography for tests
//! - [`util`] - Seedable randomness and hex helpers
//!
//! ## Example
//!
//! ```
//! use cipherkit_core::cipher::{AesGcmCipher, AesKeyGenerator, SymmetricCipher};
//! use cipherkit_core::key::KeyGenerator;
//!
//! let key = AesKeyGenerator::new().generate_named_key("k1")?;
//! let encrypted = AesGcmCipher.encrypt(&key, &b"Hello world".to_vec())?;
//! let decrypted = AesGcmCipher.decrypt(&key, &encrypted)?;
//! assert_eq!(decrypted, b"Hello world");
//! # Ok::<(), cipherkit_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod cipher;
pub mod config;
pub mod error;
pub mod hash;
pub mod key;
pub mod keychain;
pub mod serialization;
pub mod storage;
pub mod stubs;
pub mod util;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use config::CryptoConfig;
pub use error::{Error, Result};
pub use keychain::{KeyChain, KeyChainSerializer};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Returns the version of Cipherkit Core
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================================
// TESTS
// ============================================================================
