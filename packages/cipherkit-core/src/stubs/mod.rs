//! # Stand-in Cryptography
//!
//! Reference implementations that emulate cryptography by wrapping values,
//! so protocol-level tests can assert on readable outputs.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `DummyHashFunction.digest("abc")` | `H(abc)` |
//! | `DummySymmetricCipher.encrypt(k1, "abc")` | `E[k1,abc]` |
//! | `DummyAsymmetricCipher.encrypt_with_public(PU_alice, "abc")` | `E[PU_alice,abc]` |
//!
//! Decryption still behaves like the real thing: a wrapper only opens for
//! the matching key, and a value that was never wrapped is rejected.
//!
//! **None of this provides any security.**

mod asymmetric;
mod hash;
mod payload;
mod symmetric;

pub use asymmetric::{
    DummyAsymmetricCipher, DummyAsymmetricKeyConverter, DummyKeyPairGenerator, DummyPrivateKey,
    DummyPublicKey,
};
pub use hash::{DummyHashFunction, HashValue};
pub use payload::{EncryptedObject, Payload, PayloadText};
pub use symmetric::{
    DummyKeyGenerator, DummySymmetricCipher, DummySymmetricKey, DummySymmetricKeyConverter,
};
