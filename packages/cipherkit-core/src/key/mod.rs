//! # Key Contracts
//!
//! The minimal identity shared by every key, and the marker traits that bind
//! a key to the family of ciphers allowed to use it.
//!
//! ## Key Families
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          KEY FAMILIES                                   │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │                         ┌───────────────┐                              │
//! │                         │      Key      │  name() (may be empty)       │
//! │                         └───────┬───────┘                              │
//! │               ┌─────────────────┼─────────────────┐                    │
//! │               ▼                 ▼                 ▼                    │
//! │     ┌─────────────────┐ ┌───────────────┐ ┌────────────────┐           │
//! │     │  SymmetricKey   │ │   PublicKey   │ │   PrivateKey   │           │
//! │     │ (both ways)     │ │ (pair half)   │ │ (pair half)    │           │
//! │     └─────────────────┘ └───────┬───────┘ └───────┬────────┘           │
//! │                                 └────────┬────────┘                    │
//! │                                          ▼                             │
//! │                              AsymmetricKey<PU, PR>                     │
//! │                              (closed sum of both halves)               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A cipher names its exact key type through an associated type, so a key of
//! a foreign algorithm is rejected by the compiler instead of at runtime.
//! Keys are immutable values: once built, neither name nor material changes.

mod converter;
mod generator;
mod pair;

pub use converter::ByteKeyConverter;
pub use generator::{KeyGenerator, KeyPairGenerator};
pub use pair::KeyPair;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identity common to every cryptographic key
///
/// The name is informational. It may be empty and is not guaranteed to be
/// unique.
pub trait Key {
    /// The key's name
    fn name(&self) -> &str;
}

/// A key used for both encryption and decryption
pub trait SymmetricKey: Key {}

/// The public half of an asymmetric key pair
pub trait PublicKey: Key {}

/// The private half of an asymmetric key pair
pub trait PrivateKey: Key {}

impl<K: Key + ?Sized> Key for &K {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Either half of an asymmetric key pair
///
/// Used wherever a single value must hold a public *or* a private key, e.g.
/// a keychain mixing both, or the generic `encrypt`/`decrypt` entry points
/// of [`AsymmetricCipher`](crate::cipher::AsymmetricCipher).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsymmetricKey<PU, PR> {
    /// A public key
    Public(PU),
    /// A private key
    Private(PR),
}

impl<PU: PublicKey, PR: PrivateKey> AsymmetricKey<PU, PR> {
    /// Borrow the public key, if this is one
    pub fn public(&self) -> Option<&PU> {
        match self {
            AsymmetricKey::Public(k) => Some(k),
            AsymmetricKey::Private(_) => None,
        }
    }

    /// Borrow the private key, if this is one
    pub fn private(&self) -> Option<&PR> {
        match self {
            AsymmetricKey::Private(k) => Some(k),
            AsymmetricKey::Public(_) => None,
        }
    }

    /// Unwrap the public key, failing on a private one
    pub fn into_public(self) -> Result<PU> {
        match self {
            AsymmetricKey::Public(k) => Ok(k),
            AsymmetricKey::Private(k) => Err(Error::KeyTypeMismatch(format!(
                "Expected a public key, got private key '{}'",
                k.name()
            ))),
        }
    }

    /// Unwrap the private key, failing on a public one
    pub fn into_private(self) -> Result<PR> {
        match self {
            AsymmetricKey::Private(k) => Ok(k),
            AsymmetricKey::Public(k) => Err(Error::KeyTypeMismatch(format!(
                "Expected a private key, got public key '{}'",
                k.name()
            ))),
        }
    }

    /// Whether this is the public half
    pub fn is_public(&self) -> bool {
        matches!(self, AsymmetricKey::Public(_))
    }
}

impl<PU: PublicKey, PR: PrivateKey> Key for AsymmetricKey<PU, PR> {
    fn name(&self) -> &str {
        match self {
            AsymmetricKey::Public(k) => k.name(),
            AsymmetricKey::Private(k) => k.name(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
