use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Key, PrivateKey, PublicKey};

/// An ordered (public, private) pair of keys
///
/// Either half may be absent, e.g. a public-only pair obtained with
/// [`only_public`](Self::only_public) before handing it out. A pair with
/// both halves absent is legal, though useless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair<PU, PR> {
    public: Option<PU>,
    private: Option<PR>,
}

impl<PU: PublicKey, PR: PrivateKey> KeyPair<PU, PR> {
    /// Create a pair from its two halves
    pub fn new(public: Option<PU>, private: Option<PR>) -> Self {
        Self { public, private }
    }

    /// The public half, if present
    pub fn public_key(&self) -> Option<&PU> {
        self.public.as_ref()
    }

    /// The private half, if present
    pub fn private_key(&self) -> Option<&PR> {
        self.private.as_ref()
    }

    /// Copy of this pair with the private half stripped
    pub fn only_public(&self) -> Self
    where
        PU: Clone,
    {
        Self {
            public: self.public.clone(),
            private: None,
        }
    }

    /// Split into (public, private)
    pub fn into_parts(self) -> (Option<PU>, Option<PR>) {
        (self.public, self.private)
    }
}

impl<PU: PublicKey, PR: PrivateKey> fmt::Display for KeyPair<PU, PR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let public = self.public.as_ref().map(|k| k.name()).unwrap_or("null");
        let private = self.private.as_ref().map(|k| k.name()).unwrap_or("null");
        write!(f, "<{},{}>", public, private)
    }
}
