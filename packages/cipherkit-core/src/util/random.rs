//! Randomness sources for key generation.
//!
//! [`SeededRng`] makes key generation reproducible in tests and demos. It is
//! deterministic by construction and must never back production keys; it
//! implements [`CryptoRng`] only so it can be plugged into generators that
//! demand one.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// A deterministic random source seeded from a `u64`
///
/// Two instances built from the same seed yield the same byte stream. The
/// stream is ChaCha20 keyed from the seed, fixed across crate releases.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha20Rng,
}

impl SeededRng {
    /// Create a source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Restart the stream from a new seed
    pub fn reseed(&mut self, seed: u64) {
        self.inner = ChaCha20Rng::seed_from_u64(seed);
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for SeededRng {}

/// Either the operating system's generator or a seeded one, picked at runtime
///
/// Lets configuration decide whether generators are reproducible.
#[derive(Debug, Clone)]
pub enum ConfiguredRng {
    /// Operating system randomness
    Os(OsRng),
    /// Deterministic stream
    Seeded(SeededRng),
}

impl ConfiguredRng {
    /// Seeded when `seed` is set, OS randomness otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => ConfiguredRng::Seeded(SeededRng::new(seed)),
            None => ConfiguredRng::Os(OsRng),
        }
    }
}

impl RngCore for ConfiguredRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            ConfiguredRng::Os(rng) => rng.next_u32(),
            ConfiguredRng::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            ConfiguredRng::Os(rng) => rng.next_u64(),
            ConfiguredRng::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            ConfiguredRng::Os(rng) => rng.fill_bytes(dest),
            ConfiguredRng::Seeded(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            ConfiguredRng::Os(rng) => rng.try_fill_bytes(dest),
            ConfiguredRng::Seeded(rng) => rng.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for ConfiguredRng {}
