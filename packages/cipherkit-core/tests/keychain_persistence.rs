//! Keychains saved to a directory and loaded back through a new handle.

use cipherkit_core::cipher::{
    AesGcmCipher, AesKey, AesKeyConverter, AesKeyGenerator, AsymmetricCipher, RsaCipher,
    RsaKeyPairGenerator, RsaPrivateKey, RsaPrivateKeyConverter, SymmetricCipher,
};
use cipherkit_core::key::{KeyGenerator, KeyPairGenerator};
use cipherkit_core::storage::{DirectoryStorage, Storage};
use cipherkit_core::util::SeededRng;
use cipherkit_core::{Error, KeyChain, KeyChainSerializer};

fn people_keychain() -> KeyChain<AesKey> {
    let mut generator = AesKeyGenerator::with_rng(SeededRng::new(0));
    let mut keychain = KeyChain::new();
    for person in ["Alice", "Bob", "Carl"] {
        keychain.add(person, generator.generate_named_key(person).unwrap());
    }
    keychain
}

#[test]
fn test_directory_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let keychain = people_keychain();
    let serializer = KeyChainSerializer::new(AesKeyConverter);

    let mut storage = DirectoryStorage::open(dir.path()).unwrap();
    serializer.save(&keychain, &mut storage).unwrap();
    assert_eq!(storage.list().unwrap(), vec!["Alice", "Bob", "Carl"]);

    let storage = DirectoryStorage::open(dir.path()).unwrap();
    let mut loaded: KeyChain<AesKey> = KeyChain::new();
    assert_eq!(serializer.load(&mut loaded, &storage).unwrap(), 3);
    assert_eq!(loaded, keychain);
}

#[test]
fn test_reloaded_key_decrypts() {
    let dir = tempfile::tempdir().unwrap();
    let keychain = people_keychain();
    let serializer = KeyChainSerializer::new(AesKeyConverter);
    serializer
        .save(&keychain, &mut DirectoryStorage::open(dir.path()).unwrap())
        .unwrap();

    let cipher = AesGcmCipher::new();
    let encrypted = cipher
        .encrypt(keychain.get_key("Bob").unwrap(), &b"Hello world".to_vec())
        .unwrap();

    let mut loaded: KeyChain<AesKey> = KeyChain::new();
    serializer
        .load(&mut loaded, &DirectoryStorage::open(dir.path()).unwrap())
        .unwrap();

    let decrypted = cipher
        .decrypt(loaded.get_key("Bob").unwrap(), &encrypted)
        .unwrap();
    assert_eq!(decrypted, b"Hello world");
    assert!(cipher
        .decrypt(loaded.get_key("Alice").unwrap(), &encrypted)
        .is_err());
}

#[test]
fn test_unsafe_entity_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut keychain = people_keychain();
    let key = keychain.get_key("Alice").unwrap().clone();
    keychain.add("../escape", key);

    let serializer = KeyChainSerializer::new(AesKeyConverter);
    let err = serializer
        .save(&keychain, &mut DirectoryStorage::open(dir.path().join("keys")).unwrap())
        .unwrap_err();

    assert!(matches!(err, Error::InvalidUnitName(_)));
    assert!(!dir.path().join("escape").exists());
}

#[test]
fn test_failed_save_keeps_earlier_units() {
    let mut keychain = people_keychain();
    let key = keychain.get_key("Alice").unwrap().clone();
    keychain.add("Bob/escape", key);

    let serializer = KeyChainSerializer::new(AesKeyConverter);
    for _ in 0..10 {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = DirectoryStorage::open(dir.path()).unwrap();
        let err = serializer.save(&keychain, &mut storage).unwrap_err();

        assert!(matches!(err, Error::InvalidUnitName(_)));
        // "Bob" sorts before "Bob/escape", "Carl" after it
        assert_eq!(storage.list().unwrap(), vec!["Alice", "Bob"]);
    }
}

#[test]
fn test_load_stops_at_foreign_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Alice"), [7u8; 32]).unwrap();
    std::fs::write(dir.path().join("Bob"), b"not a key").unwrap();

    let serializer = KeyChainSerializer::new(AesKeyConverter);
    let mut loaded: KeyChain<AesKey> = KeyChain::new();
    let err = serializer
        .load(&mut loaded, &DirectoryStorage::open(dir.path()).unwrap())
        .unwrap_err();

    assert!(matches!(err, Error::InvalidKey(_)));
    assert!(loaded.has_key("Alice"));
    assert!(!loaded.has_key("Bob"));
}

#[test]
fn test_rsa_private_keychain() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = RsaKeyPairGenerator::with_rng(512, SeededRng::new(3));
    let (public, private) = generator
        .generate_named_key_pair("alice")
        .unwrap()
        .into_parts();
    let (public, private) = (public.unwrap(), private.unwrap());

    let mut keychain: KeyChain<RsaPrivateKey> = KeyChain::new();
    keychain.add("Alice", private);

    let serializer = KeyChainSerializer::new(RsaPrivateKeyConverter);
    serializer
        .save(&keychain, &mut DirectoryStorage::open(dir.path()).unwrap())
        .unwrap();

    let mut loaded: KeyChain<RsaPrivateKey> = KeyChain::new();
    serializer
        .load(&mut loaded, &DirectoryStorage::open(dir.path()).unwrap())
        .unwrap();

    let cipher = RsaCipher::new();
    let encrypted = cipher
        .encrypt_with_public(&public, &b"for alice".to_vec())
        .unwrap();
    let decrypted = cipher
        .decrypt_with_private(loaded.get_key("Alice").unwrap(), &encrypted)
        .unwrap();
    assert_eq!(decrypted, b"for alice");
}
