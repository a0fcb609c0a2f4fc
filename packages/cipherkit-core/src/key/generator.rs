use super::{KeyPair, PrivateKey, PublicKey, SymmetricKey};
use crate::error::Result;

/// Produces fresh symmetric keys
///
/// Generators own their randomness source, so generating takes `&mut self`:
/// sharing one generator across threads requires the caller to synchronize
/// it, otherwise use one generator per call site. Implementations accept a
/// seedable source (see [`SeededRng`](crate::util::SeededRng)) without any
/// change to generation code.
pub trait KeyGenerator {
    /// The kind of key produced
    type Key: SymmetricKey;

    /// Generate a key with the given name
    fn generate_named_key(&mut self, name: &str) -> Result<Self::Key>;

    /// Generate an unnamed key
    ///
    /// Fails for algorithms whose keys require a name.
    fn generate_key(&mut self) -> Result<Self::Key> {
        self.generate_named_key("")
    }
}

/// Produces fresh asymmetric key pairs
pub trait KeyPairGenerator {
    /// Public half of the generated pairs
    type PublicKey: PublicKey;
    /// Private half of the generated pairs
    type PrivateKey: PrivateKey;

    /// Generate a pair whose halves carry the given name
    fn generate_named_key_pair(
        &mut self,
        name: &str,
    ) -> Result<KeyPair<Self::PublicKey, Self::PrivateKey>>;

    /// Generate an unnamed pair
    fn generate_key_pair(&mut self) -> Result<KeyPair<Self::PublicKey, Self::PrivateKey>> {
        self.generate_named_key_pair("")
    }
}
