//! Stark field codec
//!
//! Field elements travel in three shapes:
//! - 32-byte little-endian buffers (what gets hashed)
//! - unsigned 256-bit magnitudes (`BigUint`), possibly out of range
//! - canonical field elements in `[0, FELT_PRIME)`
//!
//! Packing prover words and serializing magnitudes mask silently to 32 and
//! 256 bits respectively. Negative values and malformed buffers are rejected.

mod bytes;
mod parse;

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use self::bytes::{bytes_to_magnitude, felt_to_bytes, magnitude_to_bytes, pack_words_le, words_to_felt};
pub use self::parse::hex_to_felt;

/// Stark prime: 2^251 + 17 * 2^192 + 1
pub static FELT_PRIME: Lazy<BigUint> =
    Lazy::new(|| (BigUint::one() << 251u32) + (BigUint::from(17u32) << 192u32) + BigUint::one());

/// Rendering base for field elements shown to the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeltRadix {
    #[default]
    Decimal,
    Hex,
}

/// A decoded field element together with its pre-reduction range check.
///
/// `is_valid` says whether the source magnitude was already canonical
/// (`< FELT_PRIME`). It is computed before any reduction, so a reduced value
/// still reports `false` when its source was out of range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeltValue {
    /// The magnitude, reduced if reduction was requested and needed
    pub value: BigUint,
    /// True if the source magnitude was in `[0, FELT_PRIME)`
    pub is_valid: bool,
}

impl FeltValue {
    /// Classify `magnitude`, reducing it modulo the prime when asked to and
    /// when it is out of range.
    pub fn from_magnitude(magnitude: BigUint, reduce: bool) -> Self {
        let is_valid = magnitude < *FELT_PRIME;
        let value = if !is_valid && reduce {
            magnitude % &*FELT_PRIME
        } else {
            magnitude
        };
        Self { value, is_valid }
    }

    /// True if the source was out of range and `value` is its reduction
    pub fn was_reduced(&self) -> bool {
        !self.is_valid && self.value < *FELT_PRIME
    }

    /// Render the value in the given base (`0x`-prefixed for hex)
    pub fn render(&self, radix: FeltRadix) -> String {
        match radix {
            FeltRadix::Decimal => self.value.to_str_radix(10),
            FeltRadix::Hex => format!("{:#x}", self.value),
        }
    }
}

impl fmt::Display for FeltValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
