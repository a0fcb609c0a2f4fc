//! Small helpers shared by the rest of the crate.

mod hex;
mod random;

pub use self::hex::{from_hex_string, to_hex_string};
pub use random::{ConfiguredRng, SeededRng};
