use super::Key;
use crate::error::Result;

/// Maps a key to and from its canonical byte encoding
///
/// This is the unit of persistence: a keychain is saved as one encoded key
/// per storage unit. `from_bytes(to_bytes(k))` must behave exactly like `k`
/// under the matching cipher, though metadata such as the key's name need
/// not survive the trip.
///
/// The encoding carries no algorithm tag. Implementations must reject bytes
/// they could not have produced rather than build a key out of them.
pub trait ByteKeyConverter {
    /// The kind of key converted
    type Key: Key;

    /// Encode a key
    fn to_bytes(&self, key: &Self::Key) -> Result<Vec<u8>>;

    /// Decode a key
    fn from_bytes(&self, bytes: &[u8]) -> Result<Self::Key>;
}

impl<C: ByteKeyConverter + ?Sized> ByteKeyConverter for &C {
    type Key = C::Key;

    fn to_bytes(&self, key: &Self::Key) -> Result<Vec<u8>> {
        (**self).to_bytes(key)
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<Self::Key> {
        (**self).from_bytes(bytes)
    }
}
