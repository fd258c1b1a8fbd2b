//! BLAKE2s program digests
//!
//! A digest covers an ordered sequence of 32-byte buffers treated as one
//! message: feeding buffers one at a time or pre-concatenated gives the same
//! result, while reordering them does not.

use std::fmt;

use blake2::{Blake2s256, Digest};

/// Digest output size in bytes
pub const DIGEST_BYTES: usize = 32;

/// Finalized BLAKE2s-256 digest, shown as `0x` followed by lowercase hex
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProgramDigest([u8; DIGEST_BYTES]);

impl ProgramDigest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for ProgramDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Streaming hasher over program buffers.
///
/// `finalize` consumes the hasher, so a finished digest cannot be extended.
#[derive(Clone)]
pub struct ProgramHasher {
    state: Blake2s256,
}

impl ProgramHasher {
    pub fn new() -> Self {
        Self {
            state: Blake2s256::new(),
        }
    }

    /// Absorb the next buffer in sequence
    pub fn update(&mut self, bytes: impl AsRef<[u8]>) {
        Digest::update(&mut self.state, bytes.as_ref());
    }

    pub fn finalize(self) -> ProgramDigest {
        let mut out = [0u8; DIGEST_BYTES];
        out.copy_from_slice(&self.state.finalize());
        ProgramDigest(out)
    }
}

impl Default for ProgramHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Digest an ordered sequence of buffers in one go
pub fn hash_buffers<I>(buffers: I) -> ProgramDigest
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut hasher = ProgramHasher::new();
    for buffer in buffers {
        hasher.update(buffer);
    }
    hasher.finalize()
}
