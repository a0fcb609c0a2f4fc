use std::hash::Hash;
use std::io::{Read, Write};

use zeroize::Zeroizing;

use super::KeyChain;
use crate::error::{Error, Result};
use crate::key::ByteKeyConverter;
use crate::storage::Storage;

/// Saves and loads keychains, one storage unit per entity
///
/// The converter fixes the key encoding; the same converter must be used to
/// load what was saved.
#[derive(Debug, Clone, Default)]
pub struct KeyChainSerializer<C> {
    converter: C,
}

impl<C: ByteKeyConverter> KeyChainSerializer<C> {
    /// Create a serializer using `converter` for key bytes
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    /// The key converter
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Write every (entity, key) pair to a unit named after the entity
    ///
    /// Entities are written in name order. Stops at the first key that
    /// cannot be encoded or unit that cannot be written; the units of the
    /// entities ordered before it are kept.
    pub fn save<E, S>(&self, keychain: &KeyChain<C::Key, E>, storage: &mut S) -> Result<()>
    where
        E: AsRef<str> + Eq + Hash,
        S: Storage,
    {
        let mut entries: Vec<_> = keychain.entries().collect();
        entries.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

        for (entity, key) in entries {
            let unit = entity.as_ref();
            let bytes = Zeroizing::new(self.converter.to_bytes(key)?);

            let mut writer = storage.open_write(unit)?;
            writer
                .write_all(&bytes)
                .and_then(|()| writer.flush())
                .map_err(|source| Error::StorageWrite {
                    unit: unit.to_string(),
                    source,
                })?;

            tracing::debug!(unit, len = bytes.len(), "Saved key");
        }

        tracing::info!(count = keychain.len(), "Saved keychain");
        Ok(())
    }

    /// Add one key per storage unit to `keychain`, keyed by unit name
    ///
    /// Fails fast: a unit that does not decode to a key aborts the load, and
    /// keys added before it stay in `keychain`. Returns the number of keys
    /// added.
    pub fn load<E, S>(&self, keychain: &mut KeyChain<C::Key, E>, storage: &S) -> Result<usize>
    where
        E: From<String> + Eq + Hash,
        S: Storage,
    {
        let units = storage.list()?;

        for unit in &units {
            let mut reader = storage.open_read(unit)?;
            let mut bytes = Zeroizing::new(Vec::new());
            reader
                .read_to_end(&mut bytes)
                .map_err(|source| Error::StorageRead {
                    unit: unit.clone(),
                    source,
                })?;

            let key = self.converter.from_bytes(&bytes).map_err(|e| {
                tracing::debug!(unit = %unit, error = %e, "Unit is not a valid key");
                e
            })?;
            keychain.add(unit.clone(), key);

            tracing::debug!(unit = %unit, "Loaded key");
        }

        tracing::info!(count = units.len(), "Loaded keychain");
        Ok(units.len())
    }
}
