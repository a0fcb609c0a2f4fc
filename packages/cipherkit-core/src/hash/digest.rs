use std::fmt;
use std::marker::PhantomData;

use sha2::Digest;

use super::HashFunction;
use crate::error::Result;

/// A byte-oriented message digest backed by a RustCrypto hash
///
/// Stateless: each call hashes its input from scratch, so one instance can
/// be shared freely.
pub struct MessageDigest<D> {
    algorithm: &'static str,
    _digest: PhantomData<fn() -> D>,
}

/// SHA-256
pub type Sha256Digest = MessageDigest<sha2::Sha256>;

/// SHA-512
pub type Sha512Digest = MessageDigest<sha2::Sha512>;

/// MD5. Broken for collision resistance; kept for fingerprints and legacy
/// interop only.
pub type Md5Digest = MessageDigest<md5::Md5>;

impl Sha256Digest {
    /// SHA-256
    pub fn new() -> Self {
        Self::named("SHA-256")
    }
}

impl Sha512Digest {
    /// SHA-512
    pub fn new() -> Self {
        Self::named("SHA-512")
    }
}

impl Md5Digest {
    /// MD5
    pub fn new() -> Self {
        Self::named("MD5")
    }
}

impl Default for Sha256Digest {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Sha512Digest {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Md5Digest {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> MessageDigest<D> {
    fn named(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            _digest: PhantomData,
        }
    }

    /// Standard name of the algorithm
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }
}

impl<D> Clone for MessageDigest<D> {
    fn clone(&self) -> Self {
        Self::named(self.algorithm)
    }
}

impl<D> fmt::Debug for MessageDigest<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageDigest")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl<D> fmt::Display for MessageDigest<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm)
    }
}

impl<D: Digest> HashFunction<[u8]> for MessageDigest<D> {
    type Digest = Vec<u8>;

    fn digest(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(D::digest(input).to_vec())
    }
}

/// Strings are hashed through their UTF-8 encoding
impl<D: Digest> HashFunction<str> for MessageDigest<D> {
    type Digest = Vec<u8>;

    fn digest(&self, input: &str) -> Result<Vec<u8>> {
        Ok(D::digest(input.as_bytes()).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::to_hex_string;

    #[test]
    fn test_sha256_known_vector() {
        let digest = Sha256Digest::new().digest("abc").unwrap();
        assert_eq!(
            to_hex_string(&digest),
            "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
        );
    }

    #[test]
    fn test_md5_known_vector() {
        let digest = Md5Digest::new().digest("abc").unwrap();
        assert_eq!(to_hex_string(&digest), "900150983CD24FB0D6963F7D28E17F72");
    }

    #[test]
    fn test_sha512_width() {
        let digest = Sha512Digest::new().digest(b"".as_slice()).unwrap();
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn test_deterministic() {
        let h = Sha256Digest::new();
        assert_eq!(h.digest("kwyjibo").unwrap(), h.digest("kwyjibo").unwrap());
        assert_ne!(h.digest("kwyjibo").unwrap(), h.digest("kwyjiba").unwrap());
    }

    #[test]
    fn test_str_and_bytes_agree() {
        let h = Sha512Digest::new();
        assert_eq!(
            h.digest("Hello world").unwrap(),
            h.digest(b"Hello world".as_slice()).unwrap()
        );
        assert_eq!(h.to_string(), "SHA-512");
    }
}
