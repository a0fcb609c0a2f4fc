use super::HashFunction;
use crate::error::Result;

/// Width of a [`ShortHashFunction`] digest when none is given
pub const DEFAULT_SHORT_HASH_LENGTH: usize = 8;

/// Truncates the digest of an inner hash function to a fixed width
///
/// The output is the first `length` bytes of the inner digest, zero-padded
/// on the right when the inner digest is shorter.
///
/// ## Security Warning
///
/// Truncation throws away collision resistance: an 8-byte digest collides
/// after roughly 2^32 inputs. Use it for short fingerprints, never for
/// integrity.
#[derive(Debug, Clone)]
pub struct ShortHashFunction<H> {
    inner: H,
    length: usize,
}

impl<H> ShortHashFunction<H> {
    /// Wrap `inner`, keeping [`DEFAULT_SHORT_HASH_LENGTH`] bytes
    pub fn new(inner: H) -> Self {
        Self::with_length(inner, DEFAULT_SHORT_HASH_LENGTH)
    }

    /// Wrap `inner`, keeping `length` bytes
    pub fn with_length(inner: H, length: usize) -> Self {
        Self { inner, length }
    }

    /// Width of the produced digests
    pub fn length(&self) -> usize {
        self.length
    }
}

impl<I, H> HashFunction<I> for ShortHashFunction<H>
where
    I: ?Sized,
    H: HashFunction<I>,
    H::Digest: AsRef<[u8]>,
{
    type Digest = Vec<u8>;

    fn digest(&self, input: &I) -> Result<Vec<u8>> {
        let full = self.inner.digest(input)?;
        let full = full.as_ref();

        let mut out = vec![0u8; self.length];
        let kept = full.len().min(self.length);
        out[..kept].copy_from_slice(&full[..kept]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{Md5Digest, Sha256Digest};

    /// Hash whose digest is the input itself
    struct Echo;

    impl HashFunction<[u8]> for Echo {
        type Digest = Vec<u8>;

        fn digest(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.to_vec())
        }
    }

    #[test]
    fn test_truncates_to_prefix() {
        let full = Sha256Digest::new().digest(b"abc".as_slice()).unwrap();
        let short = ShortHashFunction::new(Sha256Digest::new())
            .digest(b"abc".as_slice())
            .unwrap();

        assert_eq!(short.len(), 8);
        assert_eq!(short, full[..8]);
    }

    #[test]
    fn test_pads_short_digests_with_zeros() {
        let short = ShortHashFunction::with_length(Echo, 6)
            .digest(&[1u8, 2, 3][..])
            .unwrap();
        assert_eq!(short, vec![1, 2, 3, 0, 0, 0]);
    }

    #[test]
    fn test_custom_length_over_md5() {
        let h = ShortHashFunction::with_length(Md5Digest::new(), 20);
        let out = h.digest("kwyjibo").unwrap();

        let full = Md5Digest::new().digest("kwyjibo").unwrap();
        assert_eq!(out.len(), 20);
        assert_eq!(&out[..16], &full[..]);
        assert_eq!(&out[16..], &[0u8; 4]);
    }

    #[test]
    fn test_zero_length() {
        let h = ShortHashFunction::with_length(Echo, 0);
        assert!(h.digest(&[9u8][..]).unwrap().is_empty());
    }
}
