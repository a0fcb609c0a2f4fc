use std::collections::BTreeMap;
use std::io::{self, Cursor, Write};
use std::sync::Arc;

use parking_lot::RwLock;

use super::Storage;
use crate::error::{Error, Result};

type Units = Arc<RwLock<BTreeMap<String, Vec<u8>>>>;

/// Units kept in a shared in-memory map
///
/// Clones share the same units, so one handle can save a keychain and
/// another load it back. Intended for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    units: Units,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of units
    pub fn len(&self) -> usize {
        self.units.read().len()
    }

    /// Whether the store has no units
    pub fn is_empty(&self) -> bool {
        self.units.read().is_empty()
    }

    /// Copy of a unit's content
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.units.read().get(name).cloned()
    }

    /// Set a unit's content directly
    pub fn insert(&self, name: impl Into<String>, content: Vec<u8>) {
        self.units.write().insert(name.into(), content);
    }
}

impl Storage for MemoryStorage {
    type Reader = Cursor<Vec<u8>>;
    type Writer = MemoryWriter;

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.units.read().keys().cloned().collect())
    }

    fn open_read(&self, name: &str) -> Result<Cursor<Vec<u8>>> {
        self.get(name)
            .map(Cursor::new)
            .ok_or_else(|| Error::StorageNotFound(name.to_string()))
    }

    fn open_write(&mut self, name: &str) -> Result<MemoryWriter> {
        self.units.write().insert(name.to_string(), Vec::new());
        Ok(MemoryWriter {
            name: name.to_string(),
            buffer: Vec::new(),
            units: Arc::clone(&self.units),
        })
    }
}

/// Sink for one [`MemoryStorage`] unit
///
/// Written bytes become visible on `flush()` and when the writer is dropped.
#[derive(Debug)]
pub struct MemoryWriter {
    name: String,
    buffer: Vec<u8>,
    units: Units,
}

impl MemoryWriter {
    fn commit(&self) {
        self.units
            .write()
            .insert(self.name.clone(), self.buffer.clone());
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.commit();
        Ok(())
    }
}

impl Drop for MemoryWriter {
    fn drop(&mut self) {
        self.commit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_clones_share_units() {
        let mut storage = MemoryStorage::new();
        let other = storage.clone();

        let mut writer = storage.open_write("Alice").unwrap();
        writer.write_all(b"key").unwrap();
        writer.flush().unwrap();

        assert_eq!(other.list().unwrap(), vec!["Alice"]);
        let mut content = Vec::new();
        other
            .open_read("Alice")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"key");
    }

    #[test]
    fn test_drop_commits() {
        let mut storage = MemoryStorage::new();
        {
            let mut writer = storage.open_write("Bob").unwrap();
            writer.write_all(b"abc").unwrap();
        }
        assert_eq!(storage.get("Bob"), Some(b"abc".to_vec()));
    }

    #[test]
    fn test_open_write_truncates() {
        let mut storage = MemoryStorage::new();
        storage.insert("Carl", b"old".to_vec());

        let writer = storage.open_write("Carl").unwrap();
        assert_eq!(storage.get("Carl"), Some(Vec::new()));
        drop(writer);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_missing_unit() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert!(matches!(
            storage.open_read("nobody"),
            Err(Error::StorageNotFound(_))
        ));
    }
}
