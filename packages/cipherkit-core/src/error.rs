//! # Error Handling
//!
//! One error type for the whole library. Every lower-level failure (storage
//! I/O, serialization, a rejected padding) is caught at the boundary of the
//! operation that hit it and re-raised as an [`Error`].
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                     │
//! │  │                                                                      │
//! │  ├── Key Errors                                                        │
//! │  │   ├── InvalidKey            - Key material rejected                 │
//! │  │   ├── InvalidKeyName        - Mandatory key name missing            │
//! │  │   ├── KeyGenerationFailed   - Generator could not produce a key     │
//! │  │   └── KeyTypeMismatch       - Wrong key variant for the operation   │
//! │  │                                                                      │
//! │  ├── Cipher Errors                                                     │
//! │  │   ├── EncryptionFailed      - Encryption rejected the input         │
//! │  │   ├── DecryptionFailed      - Wrong key, tampered or bad padding    │
//! │  │   └── InvalidCiphertext     - Input was never produced by encrypt   │
//! │  │                                                                      │
//! │  ├── Digest Errors                                                     │
//! │  │   └── DigestFailed          - Hash function rejected the input      │
//! │  │                                                                      │
//! │  ├── Serialization Errors                                              │
//! │  │   ├── SerializationError    - Object could not be printed           │
//! │  │   ├── DeserializationError  - Object could not be read back         │
//! │  │   └── ConversionError       - Representation/message type mismatch  │
//! │  │                                                                      │
//! │  ├── Storage Errors                                                    │
//! │  │   ├── StorageList           - Units could not be listed             │
//! │  │   ├── StorageRead           - Unit could not be read                │
//! │  │   ├── StorageWrite          - Unit could not be written             │
//! │  │   ├── StorageNotFound       - No unit with that name                │
//! │  │   └── InvalidUnitName       - Name illegal in the storage namespace │
//! │  │                                                                      │
//! │  └── Internal Errors                                                   │
//! │      ├── InvalidConfig         - Configuration rejected                │
//! │      └── Internal              - Should not happen                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No operation in this crate retries. A failed encrypt, decrypt, save or
//! load is reported once and the caller decides what to do next.

use thiserror::Error;

/// Result type alias for all cipherkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cipherkit
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Key Errors (100-199)
    // ========================================================================

    /// Key material could not be used or reconstructed
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A key that requires a name was given an empty one
    #[error("Invalid key name: {0}")]
    InvalidKeyName(String),

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// A key of the wrong variant was supplied
    #[error("Key type mismatch: {0}")]
    KeyTypeMismatch(String),

    // ========================================================================
    // Cipher Errors (200-299)
    // ========================================================================

    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// The input to a decryption was not a ciphertext of this cipher
    #[error("Invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    // ========================================================================
    // Digest Errors (300-399)
    // ========================================================================

    /// Digest computation failed
    #[error("Digest failed: {0}")]
    DigestFailed(String),

    // ========================================================================
    // Serialization Errors (400-499)
    // ========================================================================

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// Conversion between an intermediate representation and a cipher
    /// message failed
    #[error("Conversion error: {0}")]
    ConversionError(String),

    // ========================================================================
    // Storage Errors (500-599)
    // ========================================================================

    /// Storage units could not be enumerated
    #[error("Failed to list storage units: {source}")]
    StorageList {
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A storage unit could not be read
    #[error("Failed to read storage unit '{unit}': {source}")]
    StorageRead {
        /// Name of the unit
        unit: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A storage unit could not be written
    #[error("Failed to write storage unit '{unit}': {source}")]
    StorageWrite {
        /// Name of the unit
        unit: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// No storage unit with that name
    #[error("Storage unit not found: {0}")]
    StorageNotFound(String),

    /// Unit name not representable in the storage namespace
    #[error("Invalid storage unit name: {0:?}")]
    InvalidUnitName(String),

    // ========================================================================
    // Internal Errors (900-999)
    // ========================================================================

    /// Configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the numeric error code
    ///
    /// Error codes are organized by category:
    /// - 100-199: Keys
    /// - 200-299: Ciphers
    /// - 300-399: Digests
    /// - 400-499: Serialization
    /// - 500-599: Storage
    /// - 900-999: Internal
    pub fn code(&self) -> i32 {
        match self {
            // Keys (100-199)
            Error::InvalidKey(_) => 100,
            Error::InvalidKeyName(_) => 101,
            Error::KeyGenerationFailed(_) => 102,
            Error::KeyTypeMismatch(_) => 103,

            // Ciphers (200-299)
            Error::EncryptionFailed(_) => 200,
            Error::DecryptionFailed(_) => 201,
            Error::InvalidCiphertext(_) => 202,

            // Digests (300-399)
            Error::DigestFailed(_) => 300,

            // Serialization (400-499)
            Error::SerializationError(_) => 400,
            Error::DeserializationError(_) => 401,
            Error::ConversionError(_) => 402,

            // Storage (500-599)
            Error::StorageList { .. } => 500,
            Error::StorageRead { .. } => 501,
            Error::StorageWrite { .. } => 502,
            Error::StorageNotFound(_) => 503,
            Error::InvalidUnitName(_) => 504,

            // Internal (900-999)
            Error::InvalidConfig(_) => 900,
            Error::Internal(_) => 901,
        }
    }

    /// Whether this error came from the storage collaborator rather than
    /// from a cryptographic operation
    pub fn is_storage_error(&self) -> bool {
        (500..600).contains(&self.code())
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
