use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::HashFunction;
use crate::error::Result;

/// Scalar digest of any [`Hash`] value
///
/// Uses the standard library's SipHash with fixed keys, so the value is
/// stable within a build but not across Rust releases. Not collision
/// resistant; meant for bucketing, never for integrity.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashCode;

impl<T: Hash + ?Sized> HashFunction<T> for HashCode {
    type Digest = u64;

    fn digest(&self, input: &T) -> Result<u64> {
        let mut hasher = DefaultHasher::new();
        input.hash(&mut hasher);
        Ok(hasher.finish())
    }
}
