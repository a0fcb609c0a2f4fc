//! # Storage Module
//!
//! Named byte units, the collaborator the keychain serializer persists into.
//!
//! ## Storage Contract
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         STORAGE CONTRACT                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  Storage Trait                                                  │   │
//! │  │  ─────────────                                                  │   │
//! │  │                                                                 │   │
//! │  │  • list()             - Names of all units                     │   │
//! │  │  • open_read(name)    - Byte source for a unit                 │   │
//! │  │  • open_write(name)   - Byte sink, creating or truncating      │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Implementations:                                                      │
//! │  ────────────────                                                       │
//! │                                                                         │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │   DirectoryStorage       │  │    MemoryStorage         │            │
//! │  │                          │  │                          │            │
//! │  │ - one file per unit      │  │ - shared map, clonable   │            │
//! │  │ - buffered I/O           │  │ - commits on flush/drop  │            │
//! │  │ - unsafe names rejected  │  │ - any name accepted      │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Readers and writers are closed when dropped, on every exit path. Callers
//! should still `flush()` a writer before dropping it: a failure inside drop
//! cannot be reported.

mod directory;
mod memory;

pub use directory::DirectoryStorage;
pub use memory::{MemoryStorage, MemoryWriter};

use std::io::{Read, Write};

use crate::error::{Error, Result};

/// A namespace of named byte units
pub trait Storage {
    /// Byte source returned by [`open_read`](Self::open_read)
    type Reader: Read;
    /// Byte sink returned by [`open_write`](Self::open_write)
    type Writer: Write;

    /// Names of all units, in no guaranteed order
    fn list(&self) -> Result<Vec<String>>;

    /// Open a unit for reading
    ///
    /// Fails with [`Error::StorageNotFound`] if there is no such unit.
    fn open_read(&self, name: &str) -> Result<Self::Reader>;

    /// Open a unit for writing, replacing any previous content
    fn open_write(&mut self, name: &str) -> Result<Self::Writer>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    type Reader = S::Reader;
    type Writer = S::Writer;

    fn list(&self) -> Result<Vec<String>> {
        (**self).list()
    }

    fn open_read(&self, name: &str) -> Result<Self::Reader> {
        (**self).open_read(name)
    }

    fn open_write(&mut self, name: &str) -> Result<Self::Writer> {
        (**self).open_write(name)
    }
}

/// Reject names that would escape or alias a flat namespace
///
/// Refuses the empty name, `.` and `..`, and anything containing `/`, `\`
/// or NUL.
pub fn validate_unit_name(name: &str) -> Result<()> {
    let illegal = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if illegal {
        return Err(Error::InvalidUnitName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_unit_name() {
        assert!(validate_unit_name("Alice").is_ok());
        assert!(validate_unit_name("bob.key").is_ok());
        assert!(validate_unit_name("Carl Smith").is_ok());

        for bad in ["", ".", "..", "a/b", "a\\b", "../etc", "nul\0"] {
            assert!(
                matches!(validate_unit_name(bad), Err(Error::InvalidUnitName(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
