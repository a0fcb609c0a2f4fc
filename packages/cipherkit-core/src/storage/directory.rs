use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use super::{validate_unit_name, Storage};
use crate::error::{Error, Result};

/// Units stored as regular files in a single directory
///
/// Unit names map to file names verbatim, with no escaping. Names that are
/// not a plain file name are rejected with [`Error::InvalidUnitName`].
#[derive(Debug, Clone)]
pub struct DirectoryStorage {
    root: PathBuf,
}

impl DirectoryStorage {
    /// Use `root` as the storage directory, creating it if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| Error::StorageWrite {
            unit: root.display().to_string(),
            source,
        })?;

        tracing::debug!(root = %root.display(), "Opened directory storage");
        Ok(Self { root })
    }

    /// The storage directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn unit_path(&self, name: &str) -> Result<PathBuf> {
        validate_unit_name(name)?;
        Ok(self.root.join(name))
    }
}

impl Storage for DirectoryStorage {
    type Reader = BufReader<File>;
    type Writer = BufWriter<File>;

    /// Regular files in the directory, sorted by name
    ///
    /// Subdirectories and files whose names are not UTF-8 are skipped.
    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = fs::read_dir(&self.root).map_err(|source| Error::StorageList { source })?;

        for entry in entries {
            let entry = entry.map_err(|source| Error::StorageList { source })?;
            let file_type = entry
                .file_type()
                .map_err(|source| Error::StorageList { source })?;
            if !file_type.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!(name = ?raw, "Skipping non UTF-8 file name"),
            }
        }

        names.sort();
        Ok(names)
    }

    fn open_read(&self, name: &str) -> Result<BufReader<File>> {
        let path = self.unit_path(name)?;
        let file = File::open(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::StorageNotFound(name.to_string()),
            _ => Error::StorageRead {
                unit: name.to_string(),
                source,
            },
        })?;
        Ok(BufReader::new(file))
    }

    fn open_write(&mut self, name: &str) -> Result<BufWriter<File>> {
        let path = self.unit_path(name)?;
        let file = File::create(&path).map_err(|source| Error::StorageWrite {
            unit: name.to_string(),
            source,
        })?;
        Ok(BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn test_write_list_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = DirectoryStorage::open(dir.path()).unwrap();

        for (name, data) in [("Bob", b"bbb"), ("Alice", b"aaa")] {
            let mut writer = storage.open_write(name).unwrap();
            writer.write_all(data).unwrap();
            writer.flush().unwrap();
        }

        assert_eq!(storage.list().unwrap(), vec!["Alice", "Bob"]);

        let mut content = Vec::new();
        storage
            .open_read("Alice")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"aaa");
    }

    #[test]
    fn test_overwrite_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = DirectoryStorage::open(dir.path()).unwrap();

        let mut writer = storage.open_write("Carl").unwrap();
        writer.write_all(b"a longer value").unwrap();
        writer.flush().unwrap();
        drop(writer);

        let mut writer = storage.open_write("Carl").unwrap();
        writer.write_all(b"short").unwrap();
        writer.flush().unwrap();
        drop(writer);

        let mut content = String::new();
        storage
            .open_read("Carl")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "short");
    }

    #[test]
    fn test_missing_unit() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DirectoryStorage::open(dir.path()).unwrap();

        let err = storage.open_read("nobody").unwrap_err();
        assert!(matches!(err, Error::StorageNotFound(_)));
        assert!(err.is_storage_error());
    }

    #[test]
    fn test_unsafe_names_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = DirectoryStorage::open(dir.path().join("keys")).unwrap();

        assert!(matches!(
            storage.open_write("../escape"),
            Err(Error::InvalidUnitName(_))
        ));
        assert!(matches!(storage.open_read(""), Err(Error::InvalidUnitName(_))));
        assert!(!dir.path().join("escape").exists());
    }

    #[test]
    fn test_subdirectories_not_listed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("Dave"), b"d").unwrap();

        let storage = DirectoryStorage::open(dir.path()).unwrap();
        assert_eq!(storage.list().unwrap(), vec!["Dave"]);
    }
}
