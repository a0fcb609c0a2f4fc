//! # KeyChain
//!
//! Associates named entities with keys ("Bob's key") and persists that
//! association through a [`Storage`](crate::storage::Storage) collaborator.
//!
//! ## Persistence Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KEYCHAIN PERSISTENCE                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   KeyChain                         Storage                              │
//! │   ────────                         ───────                              │
//! │   "Alice" ──► key_a   ──save──►    unit "Alice" = to_bytes(key_a)       │
//! │   "Bob"   ──► key_b   ──save──►    unit "Bob"   = to_bytes(key_b)       │
//! │                                                                         │
//! │   One unit per entity. No header, no algorithm tag: the caller picks   │
//! │   the ByteKeyConverter on load, and the converter rejects bytes it     │
//! │   could not have produced.                                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither `save` nor `load` is transactional. A failure partway through
//! leaves the units written (or the keys added) before it in place.
//!
//! A `KeyChain` is a plain map with no internal locking. Share one between
//! threads behind your own lock.

mod serializer;

pub use serializer::KeyChainSerializer;

use std::borrow::Borrow;
use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Map from entity identifiers to keys
///
/// The whole chain also serializes as a single map document, e.g. one JSON
/// object from entity to key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyChain<K, E: Eq + Hash = String> {
    chain: HashMap<E, K>,
}

impl<K, E: Eq + Hash> KeyChain<K, E> {
    /// Create an empty keychain
    pub fn new() -> Self {
        Self {
            chain: HashMap::new(),
        }
    }

    /// Associate `key` with `entity`, replacing any previous key
    pub fn add(&mut self, entity: impl Into<E>, key: K) -> &mut Self {
        self.chain.insert(entity.into(), key);
        self
    }

    /// Whether `entity` has a key
    pub fn has_key<Q>(&self, entity: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.chain.contains_key(entity)
    }

    /// The key of `entity`, if any
    pub fn get_key<Q>(&self, entity: &Q) -> Option<&K>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.chain.get(entity)
    }

    /// Live view of the entities, in no particular order
    pub fn entity_set(&self) -> hash_map::Keys<'_, E, K> {
        self.chain.keys()
    }

    /// Live view of the (entity, key) pairs, in no particular order
    pub fn entries(&self) -> hash_map::Iter<'_, E, K> {
        self.chain.iter()
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the keychain is empty
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl<K, E: Eq + Hash> Default for KeyChain<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E: Eq + Hash> FromIterator<(E, K)> for KeyChain<K, E> {
    fn from_iter<I: IntoIterator<Item = (E, K)>>(iter: I) -> Self {
        Self {
            chain: iter.into_iter().collect(),
        }
    }
}

impl<K, E: Eq + Hash> Extend<(E, K)> for KeyChain<K, E> {
    fn extend<I: IntoIterator<Item = (E, K)>>(&mut self, iter: I) {
        self.chain.extend(iter);
    }
}

impl<'a, K, E: Eq + Hash> IntoIterator for &'a KeyChain<K, E> {
    type Item = (&'a E, &'a K);
    type IntoIter = hash_map::Iter<'a, E, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.chain.iter()
    }
}

impl<K, E: Eq + Hash> IntoIterator for KeyChain<K, E> {
    type Item = (E, K);
    type IntoIter = hash_map::IntoIter<E, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.chain.into_iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
