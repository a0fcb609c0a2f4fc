//! Object-level ciphers built by layering a codec over a message cipher.
//!
//! The pipeline order is fixed: serialize then encrypt, decrypt then
//! deserialize. Failures from any stage come back as the crate [`Error`].

use std::any::Any;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{AsymmetricCipher, SymmetricCipher};
use crate::error::{Error, Result};
use crate::key::AsymmetricKey;
use crate::serialization::{MessageConverter, ObjectCodec};

/// Lifts a [`SymmetricCipher`] to encrypt any serde value
///
/// `C` is the inner cipher, `S` the codec, and `V` the conversion between the
/// codec's representation and the cipher's message type.
#[derive(Debug, Clone, Default)]
pub struct ObjectCipher<C, S, V> {
    cipher: C,
    codec: S,
    converter: V,
}

impl<C, S, V> ObjectCipher<C, S, V>
where
    C: SymmetricCipher,
    S: ObjectCodec,
    V: MessageConverter<S::Repr, C::Message>,
{
    /// Compose the three stages
    pub fn new(cipher: C, codec: S, converter: V) -> Self {
        Self {
            cipher,
            codec,
            converter,
        }
    }

    /// The inner message cipher
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Serialize `object` and encrypt it under `key`
    pub fn encrypt<O: Serialize + ?Sized>(&self, key: &C::Key, object: &O) -> Result<C::Message> {
        let repr = self.codec.print(object)?;
        let message = self.converter.to_message(repr)?;
        self.cipher.encrypt(key, &message)
    }

    /// Decrypt `message` under `key` and deserialize the result
    pub fn decrypt<O: DeserializeOwned>(&self, key: &C::Key, message: &C::Message) -> Result<O> {
        let plain = self.cipher.decrypt(key, message)?;
        let repr = self.converter.from_message(plain)?;
        self.codec.read(repr)
    }

    /// Like [`decrypt`](Self::decrypt) for a value whose type is only known
    /// at runtime
    ///
    /// Fails with [`Error::ConversionError`] unless `message` is the inner
    /// cipher's message type.
    pub fn decrypt_any<O: DeserializeOwned>(&self, key: &C::Key, message: &dyn Any) -> Result<O>
    where
        C::Message: 'static,
    {
        let message = downcast_message::<C::Message>(message)?;
        self.decrypt(key, message)
    }
}

/// Lifts an [`AsymmetricCipher`] to encrypt any serde value
///
/// Takes either half of a pair through [`AsymmetricKey`]; the caller picks
/// the direction by the variant it passes.
#[derive(Debug, Clone, Default)]
pub struct AsymmetricObjectCipher<C, S, V> {
    cipher: C,
    codec: S,
    converter: V,
}

impl<C, S, V> AsymmetricObjectCipher<C, S, V>
where
    C: AsymmetricCipher,
    S: ObjectCodec,
    V: MessageConverter<S::Repr, C::Message>,
{
    /// Compose the three stages
    pub fn new(cipher: C, codec: S, converter: V) -> Self {
        Self {
            cipher,
            codec,
            converter,
        }
    }

    /// The inner message cipher
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Serialize `object` and encrypt it with whichever half `key` holds
    pub fn encrypt<O: Serialize + ?Sized>(
        &self,
        key: &AsymmetricKey<C::PublicKey, C::PrivateKey>,
        object: &O,
    ) -> Result<C::Message> {
        let repr = self.codec.print(object)?;
        let message = self.converter.to_message(repr)?;
        self.cipher.encrypt(key, &message)
    }

    /// Decrypt with whichever half `key` holds and deserialize the result
    pub fn decrypt<O: DeserializeOwned>(
        &self,
        key: &AsymmetricKey<C::PublicKey, C::PrivateKey>,
        message: &C::Message,
    ) -> Result<O> {
        let plain = self.cipher.decrypt(key, message)?;
        let repr = self.converter.from_message(plain)?;
        self.codec.read(repr)
    }

    /// Runtime-typed variant of [`decrypt`](Self::decrypt)
    pub fn decrypt_any<O: DeserializeOwned>(
        &self,
        key: &AsymmetricKey<C::PublicKey, C::PrivateKey>,
        message: &dyn Any,
    ) -> Result<O>
    where
        C::Message: 'static,
    {
        let message = downcast_message::<C::Message>(message)?;
        self.decrypt(key, message)
    }
}

fn downcast_message<M: 'static>(message: &dyn Any) -> Result<&M> {
    message.downcast_ref::<M>().ok_or_else(|| {
        Error::ConversionError(format!(
            "Expected a message of type {}",
            std::any::type_name::<M>()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::{AesGcmCipher, AesKeyGenerator, RsaCipher, RsaKeyPairGenerator};
    use crate::key::{KeyGenerator, KeyPairGenerator};
    use crate::serialization::{BincodeCodec, JsonBytes, JsonCodec, Passthrough};
    use crate::stubs::{DummySymmetricCipher, Payload, PayloadText};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Letter {
        to: String,
        body: String,
    }

    fn letter() -> Letter {
        Letter {
            to: "Bob".into(),
            body: "Hello world".into(),
        }
    }

    #[test]
    fn test_aes_json_object_round_trip() {
        let cipher = ObjectCipher::new(AesGcmCipher, JsonCodec, JsonBytes);
        let key = AesKeyGenerator::new().generate_named_key("k1").unwrap();

        let encrypted = cipher.encrypt(&key, &letter()).unwrap();
        let decrypted: Letter = cipher.decrypt(&key, &encrypted).unwrap();
        assert_eq!(decrypted, letter());
    }

    #[test]
    fn test_aes_bincode_object_round_trip() {
        let cipher = ObjectCipher::new(AesGcmCipher, BincodeCodec, Passthrough);
        let key = AesKeyGenerator::new().generate_key().unwrap();

        let encrypted = cipher.encrypt(&key, &vec![1u64, 2, 3]).unwrap();
        let decrypted: Vec<u64> = cipher.decrypt(&key, &encrypted).unwrap();
        assert_eq!(decrypted, vec![1, 2, 3]);
    }

    #[test]
    fn test_wrong_key_fails() {
        let cipher = ObjectCipher::new(AesGcmCipher, JsonCodec, JsonBytes);
        let mut generator = AesKeyGenerator::new();
        let k1 = generator.generate_named_key("k1").unwrap();
        let k2 = generator.generate_named_key("k2").unwrap();

        let encrypted = cipher.encrypt(&k1, &letter()).unwrap();
        assert!(cipher.decrypt::<Letter>(&k2, &encrypted).is_err());
    }

    #[test]
    fn test_wrong_object_type_fails() {
        let cipher = ObjectCipher::new(AesGcmCipher, JsonCodec, JsonBytes);
        let key = AesKeyGenerator::new().generate_key().unwrap();

        let encrypted = cipher.encrypt(&key, "just text").unwrap();
        let err = cipher.decrypt::<Letter>(&key, &encrypted).unwrap_err();
        assert!(matches!(err, Error::DeserializationError(_)));
    }

    #[test]
    fn test_decrypt_any_checks_message_type() {
        let cipher = ObjectCipher::new(AesGcmCipher, JsonCodec, JsonBytes);
        let key = AesKeyGenerator::new().generate_key().unwrap();
        let encrypted = cipher.encrypt(&key, &letter()).unwrap();

        let decrypted: Letter = cipher.decrypt_any(&key, &encrypted).unwrap();
        assert_eq!(decrypted, letter());

        let err = cipher
            .decrypt_any::<Letter>(&key, &"not bytes".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::ConversionError(_)));
    }

    #[test]
    fn test_dummy_payload_object_round_trip() {
        let cipher = ObjectCipher::new(DummySymmetricCipher, JsonCodec, PayloadText);
        let mut generator = DummySymmetricCipher::generator();
        let k1 = generator.generate_named_key("k1").unwrap();
        let k2 = generator.generate_named_key("k2").unwrap();

        let encrypted = cipher.encrypt(&k1, &letter()).unwrap();
        assert!(matches!(encrypted, Payload::Encrypted(_)));

        let decrypted: Letter = cipher.decrypt(&k1, &encrypted).unwrap();
        assert_eq!(decrypted, letter());
        assert!(cipher.decrypt::<Letter>(&k2, &encrypted).is_err());
    }

    #[test]
    fn test_rsa_object_round_trip() {
        let cipher = AsymmetricObjectCipher::new(RsaCipher, JsonCodec, JsonBytes);
        let (public, private) = RsaKeyPairGenerator::default()
            .generate_named_key_pair("alice")
            .unwrap()
            .into_parts();
        let public = AsymmetricKey::Public(public.unwrap());
        let private = AsymmetricKey::Private(private.unwrap());

        let encrypted = cipher.encrypt(&public, &letter()).unwrap();
        let decrypted: Letter = cipher.decrypt(&private, &encrypted).unwrap();
        assert_eq!(decrypted, letter());

        let signed = cipher.encrypt(&private, "from alice").unwrap();
        let opened: String = cipher.decrypt_any(&public, &signed).unwrap();
        assert_eq!(opened, "from alice");
    }
}
