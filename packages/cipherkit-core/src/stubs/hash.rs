use std::fmt;

use crate::error::Result;
use crate::hash::HashFunction;

/// Hash function whose digest is the input itself, tagged as a hash
///
/// Lets protocol tests check that "the hash of X" was computed without
/// reversing a real digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyHashFunction;

impl fmt::Display for DummyHashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dummy")
    }
}

impl<T: ToOwned + ?Sized> HashFunction<T> for DummyHashFunction {
    type Digest = HashValue<T::Owned>;

    fn digest(&self, input: &T) -> Result<Self::Digest> {
        Ok(HashValue {
            value: input.to_owned(),
        })
    }
}

/// Digest produced by [`DummyHashFunction`], rendered as `H(value)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashValue<T> {
    value: T,
}

impl<T> HashValue<T> {
    /// The hashed value
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display> fmt::Display for HashValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H({})", self.value)
    }
}
