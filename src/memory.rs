//! Public memory values as emitted by the Cairo prover

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{pack_words_le, words_to_felt, FeltValue};
use crate::FELT_BYTES;

/// One public memory cell: `[id, [w0, ..., w7]]` on the wire.
///
/// The word count is not checked when parsing. A cell with the wrong number
/// of words is rejected when it is converted, so it can never be skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u64, Vec<u64>)", into = "(u64, Vec<u64>)")]
pub struct PublicMemoryValue {
    /// Segment tag assigned by the prover (unused by the checks)
    pub id: u64,
    /// Little-endian 32-bit limbs of the value
    pub words: Vec<u64>,
}

impl PublicMemoryValue {
    pub fn new(id: u64, words: Vec<u64>) -> Self {
        Self { id, words }
    }

    /// The 32-byte little-endian buffer for this cell's value
    pub fn to_bytes_le(&self) -> Result<[u8; FELT_BYTES]> {
        pack_words_le(&self.words)
    }

    /// Decode the cell as a field element
    pub fn to_felt(&self, reduce: bool) -> Result<FeltValue> {
        words_to_felt(&self.words, reduce)
    }
}

impl From<(u64, Vec<u64>)> for PublicMemoryValue {
    fn from((id, words): (u64, Vec<u64>)) -> Self {
        Self { id, words }
    }
}

impl From<PublicMemoryValue> for (u64, Vec<u64>) {
    fn from(value: PublicMemoryValue) -> Self {
        (value.id, value.words)
    }
}
