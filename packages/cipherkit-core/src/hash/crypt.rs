use std::fmt;

use super::HashFunction;
use crate::error::{Error, Result};

/// Unix crypt(3) password hashing, string to string
///
/// The salt setting picks the scheme, as the C library does: `$6$` for
/// SHA-512, `$5$` for SHA-256, `$1$` for MD5, `$2b$` for bcrypt, and a
/// two-character salt for traditional DES. The output repeats the setting,
/// so a stored digest can be passed back as the salt to check a password.
///
/// [`digest`](HashFunction::digest) draws a fresh random SHA-512 salt on
/// every call; it is the one digest in this crate that is not
/// deterministic. Use [`digest_with_salt`](Self::digest_with_salt) for a
/// reproducible value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CryptDigest;

impl CryptDigest {
    /// Create the hash function
    pub fn new() -> Self {
        Self
    }

    /// Hash `input` with the scheme and salt given by `salt`
    ///
    /// Fails with [`Error::DigestFailed`] if `salt` is not a setting any
    /// supported scheme accepts.
    pub fn digest_with_salt(&self, input: &str, salt: &str) -> Result<String> {
        pwhash::unix::crypt(input, salt).map_err(|e| {
            tracing::debug!(error = %e, "crypt rejected salt");
            Error::DigestFailed(format!("Invalid crypt salt: {}", e))
        })
    }

    /// Whether `input` hashes to `hashed` under the setting `hashed` carries
    pub fn verify(&self, input: &str, hashed: &str) -> bool {
        pwhash::unix::verify(input, hashed)
    }
}

impl fmt::Display for CryptDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("crypt")
    }
}

impl HashFunction<str> for CryptDigest {
    type Digest = String;

    fn digest(&self, input: &str) -> Result<String> {
        pwhash::sha512_crypt::hash(input)
            .map_err(|e| Error::DigestFailed(format!("crypt failed: {}", e)))
    }
}
