use std::fmt;
use std::marker::PhantomData;

use super::{AsymmetricCipher, SymmetricCipher};
use crate::error::Result;
use crate::key::{PrivateKey, PublicKey, SymmetricKey};

/// Symmetric cipher that returns its input unchanged
///
/// Accepts any key of type `K`. Lets higher-level code run without paying
/// for cryptography, e.g. in protocol tests.
pub struct NoopSymmetricCipher<K, M> {
    _types: PhantomData<fn(&K, &M)>,
}

impl<K, M> NoopSymmetricCipher<K, M> {
    /// Create the cipher
    pub fn new() -> Self {
        Self {
            _types: PhantomData,
        }
    }
}

impl<K, M> Default for NoopSymmetricCipher<K, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, M> fmt::Display for NoopSymmetricCipher<K, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Noop")
    }
}

impl<K: SymmetricKey, M: Clone> SymmetricCipher for NoopSymmetricCipher<K, M> {
    type Key = K;
    type Message = M;

    fn encrypt(&self, _key: &K, message: &M) -> Result<M> {
        Ok(message.clone())
    }

    fn decrypt(&self, _key: &K, message: &M) -> Result<M> {
        Ok(message.clone())
    }
}

/// Asymmetric cipher that returns its input unchanged
pub struct NoopAsymmetricCipher<PU, PR, M> {
    _types: PhantomData<fn(&PU, &PR, &M)>,
}

impl<PU, PR, M> NoopAsymmetricCipher<PU, PR, M> {
    /// Create the cipher
    pub fn new() -> Self {
        Self {
            _types: PhantomData,
        }
    }
}

impl<PU, PR, M> Default for NoopAsymmetricCipher<PU, PR, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<PU, PR, M> fmt::Display for NoopAsymmetricCipher<PU, PR, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Noop")
    }
}

impl<PU: PublicKey, PR: PrivateKey, M: Clone> AsymmetricCipher for NoopAsymmetricCipher<PU, PR, M> {
    type PublicKey = PU;
    type PrivateKey = PR;
    type Message = M;

    fn encrypt_with_public(&self, _key: &PU, message: &M) -> Result<M> {
        Ok(message.clone())
    }

    fn encrypt_with_private(&self, _key: &PR, message: &M) -> Result<M> {
        Ok(message.clone())
    }

    fn decrypt_with_public(&self, _key: &PU, message: &M) -> Result<M> {
        Ok(message.clone())
    }

    fn decrypt_with_private(&self, _key: &PR, message: &M) -> Result<M> {
        Ok(message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{KeyGenerator, KeyPairGenerator};
    use crate::stubs::{
        DummyAsymmetricCipher, DummyPrivateKey, DummyPublicKey, DummySymmetricCipher,
        DummySymmetricKey,
    };

    #[test]
    fn test_noop_symmetric_is_identity() {
        let cipher = NoopSymmetricCipher::<DummySymmetricKey, String>::new();
        let key = DummySymmetricCipher::generator().generate_named_key("k").unwrap();

        let encrypted = cipher.encrypt(&key, &"abc".to_string()).unwrap();
        assert_eq!(encrypted, "abc");
        assert_eq!(cipher.decrypt(&key, &encrypted).unwrap(), "abc");
        assert_eq!(cipher.to_string(), "Noop");
    }

    #[test]
    fn test_noop_asymmetric_is_identity() {
        let cipher = NoopAsymmetricCipher::<DummyPublicKey, DummyPrivateKey, Vec<u8>>::new();
        let pair = DummyAsymmetricCipher::generator()
            .generate_named_key_pair("carl")
            .unwrap();
        let public = pair.public_key().unwrap();
        let private = pair.private_key().unwrap();

        let message = b"Hello world".to_vec();
        let encrypted = cipher.encrypt_with_public(public, &message).unwrap();
        assert_eq!(cipher.decrypt_with_private(private, &encrypted).unwrap(), message);
        let encrypted = cipher.encrypt_with_private(private, &message).unwrap();
        assert_eq!(cipher.decrypt_with_public(public, &encrypted).unwrap(), message);
    }
}
