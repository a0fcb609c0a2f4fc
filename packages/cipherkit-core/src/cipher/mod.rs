//! # Cipher Contracts
//!
//! Algorithm-independent encrypt/decrypt interfaces. Calling code is written
//! against [`SymmetricCipher`] or [`AsymmetricCipher`] and the algorithm is
//! chosen by whoever constructs the cipher value.
//!
//! ## Typing
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     CIPHER ↔ KEY BINDING                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  SymmetricCipher                    AsymmetricCipher                    │
//! │  ───────────────                    ────────────────                    │
//! │  type Key: SymmetricKey             type PublicKey: PublicKey           │
//! │  type Message                       type PrivateKey: PrivateKey         │
//! │                                     type Message                        │
//! │                                                                         │
//! │  encrypt(&Key, &M) -> M             encrypt_with_public(&PU, &M) -> M   │
//! │  decrypt(&Key, &M) -> M             encrypt_with_private(&PR, &M) -> M  │
//! │                                     decrypt_with_public(&PU, &M) -> M   │
//! │                                     decrypt_with_private(&PR, &M) -> M  │
//! │                                                                         │
//! │  A key from another algorithm does not type-check. The public/private  │
//! │  choice at runtime goes through the AsymmetricKey sum type.            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Decryption Discipline
//!
//! Decrypting anything that was not produced by the matching encrypt path
//! (wrong key, tampered bytes, a plain value) must fail with an
//! [`Error`](crate::Error). Implementations never return a best-effort
//! decoding.
//!
//! ## Implementations
//!
//! | Cipher | Kind | Message |
//! |--------|------|---------|
//! | [`AesGcmCipher`] | symmetric | `Vec<u8>` |
//! | [`RsaCipher`] | asymmetric | `Vec<u8>` |
//! | [`NoopSymmetricCipher`] / [`NoopAsymmetricCipher`] | either | any `Clone` |
//! | [`ObjectCipher`] / [`AsymmetricObjectCipher`] | adapter | any serde type |
//! | dummies in [`stubs`](crate::stubs) | either | [`Payload`](crate::stubs::Payload) |

mod aes;
mod noop;
mod object;
mod rsa;

pub use self::aes::{AesGcmCipher, AesKey, AesKeyConverter, AesKeyGenerator, AES_KEY_SIZE, NONCE_SIZE};
pub use self::rsa::{
    RsaCipher, RsaKeyPairGenerator, RsaPrivateKey, RsaPrivateKeyConverter, RsaPublicKey,
    RsaPublicKeyConverter, DEFAULT_RSA_KEY_BITS,
};
pub use noop::{NoopAsymmetricCipher, NoopSymmetricCipher};
pub use object::{AsymmetricObjectCipher, ObjectCipher};

use crate::error::Result;
use crate::key::{AsymmetricKey, PrivateKey, PublicKey, SymmetricKey};

/// A cipher using one key for both directions
pub trait SymmetricCipher {
    /// The exact key type this cipher accepts
    type Key: SymmetricKey;
    /// Plaintext and ciphertext type
    type Message;

    /// Encrypt `message` under `key`
    fn encrypt(&self, key: &Self::Key, message: &Self::Message) -> Result<Self::Message>;

    /// Decrypt `message` under `key`
    ///
    /// Fails if `message` was not produced by [`encrypt`](Self::encrypt)
    /// under the same key.
    fn decrypt(&self, key: &Self::Key, message: &Self::Message) -> Result<Self::Message>;
}

/// A cipher using a public/private key pair
///
/// Either half may encrypt, the other half decrypts: public-encrypt is the
/// confidentiality path, private-encrypt the origin-binding path.
pub trait AsymmetricCipher {
    /// Public half accepted by this cipher
    type PublicKey: PublicKey;
    /// Private half accepted by this cipher
    type PrivateKey: PrivateKey;
    /// Plaintext and ciphertext type
    type Message;

    /// Encrypt with a public key
    fn encrypt_with_public(
        &self,
        key: &Self::PublicKey,
        message: &Self::Message,
    ) -> Result<Self::Message>;

    /// Encrypt with a private key
    fn encrypt_with_private(
        &self,
        key: &Self::PrivateKey,
        message: &Self::Message,
    ) -> Result<Self::Message>;

    /// Decrypt with a public key (input encrypted with the private half)
    fn decrypt_with_public(
        &self,
        key: &Self::PublicKey,
        message: &Self::Message,
    ) -> Result<Self::Message>;

    /// Decrypt with a private key (input encrypted with the public half)
    fn decrypt_with_private(
        &self,
        key: &Self::PrivateKey,
        message: &Self::Message,
    ) -> Result<Self::Message>;

    /// Encrypt with whichever half `key` holds
    fn encrypt(
        &self,
        key: &AsymmetricKey<Self::PublicKey, Self::PrivateKey>,
        message: &Self::Message,
    ) -> Result<Self::Message> {
        match key {
            AsymmetricKey::Public(k) => self.encrypt_with_public(k, message),
            AsymmetricKey::Private(k) => self.encrypt_with_private(k, message),
        }
    }

    /// Decrypt with whichever half `key` holds
    fn decrypt(
        &self,
        key: &AsymmetricKey<Self::PublicKey, Self::PrivateKey>,
        message: &Self::Message,
    ) -> Result<Self::Message> {
        match key {
            AsymmetricKey::Public(k) => self.decrypt_with_public(k, message),
            AsymmetricKey::Private(k) => self.decrypt_with_private(k, message),
        }
    }
}
