//! # Digest Contract
//!
//! A hash function maps an input of type `I` to a digest. The input and
//! output types are free: byte strings for the message digests, strings for
//! [`CryptDigest`], any `Hash` value for [`HashCode`], any value at all for
//! the dummy function in [`stubs`](crate::stubs).
//!
//! ## Guarantees
//!
//! | Property | Guarantee |
//! |----------|-----------|
//! | Deterministic | Same input, same digest, on every call |
//! | Pure | No observable side effect |
//! | Total | Always a digest or an error, never an empty placeholder |
//!
//! Digests compare by value. The one exception to determinism is
//! [`CryptDigest`] without an explicit salt, which draws a random one.

mod code;
mod crypt;
mod digest;
mod short;

pub use code::HashCode;
pub use crypt::CryptDigest;
pub use digest::{Md5Digest, MessageDigest, Sha256Digest, Sha512Digest};
pub use short::{ShortHashFunction, DEFAULT_SHORT_HASH_LENGTH};

use crate::error::Result;

/// A one-way function from `I` to a digest
pub trait HashFunction<I: ?Sized> {
    /// The digest produced
    type Digest;

    /// Compute the digest of `input`
    fn digest(&self, input: &I) -> Result<Self::Digest>;
}

impl<I: ?Sized, H: HashFunction<I> + ?Sized> HashFunction<I> for &H {
    type Digest = H::Digest;

    fn digest(&self, input: &I) -> Result<Self::Digest> {
        (**self).digest(input)
    }
}
