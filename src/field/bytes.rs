//! Fixed-width little-endian buffers

use byteorder::{ByteOrder, LittleEndian};
use num_bigint::{BigInt, BigUint};

use super::FeltValue;
use crate::error::{CodecError, Result};
use crate::{FELT_BYTES, FELT_WORDS, WORD_SIZE};

/// Pack eight prover words into a 32-byte little-endian buffer.
///
/// Word `i` lands at bytes `[4i, 4i + 4)`. Bits above 32 are dropped.
pub fn pack_words_le(words: &[u64]) -> Result<[u8; FELT_BYTES]> {
    if words.len() != FELT_WORDS {
        return Err(CodecError::InvalidShape {
            expected: FELT_WORDS,
            actual: words.len(),
        });
    }

    let mut bytes = [0u8; FELT_BYTES];
    for (chunk, &word) in bytes.chunks_exact_mut(WORD_SIZE).zip(words) {
        LittleEndian::write_u32(chunk, (word & 0xffff_ffff) as u32);
    }
    Ok(bytes)
}

/// Read a 32-byte little-endian buffer as an unsigned integer
pub fn bytes_to_magnitude(bytes: &[u8]) -> Result<BigUint> {
    if bytes.len() != FELT_BYTES {
        return Err(CodecError::InvalidLength {
            expected: FELT_BYTES,
            actual: bytes.len(),
        });
    }
    Ok(BigUint::from_bytes_le(bytes))
}

/// Decode eight prover words as a field element, optionally reducing it
pub fn words_to_felt(words: &[u64], reduce: bool) -> Result<FeltValue> {
    let bytes = pack_words_le(words)?;
    let magnitude = bytes_to_magnitude(&bytes)?;
    Ok(FeltValue::from_magnitude(magnitude, reduce))
}

/// Serialize a non-negative integer into 32 little-endian bytes.
///
/// Anything above bit 255 is truncated.
pub fn felt_to_bytes(value: &BigInt) -> Result<[u8; FELT_BYTES]> {
    let magnitude = value.to_biguint().ok_or(CodecError::InvalidDomain)?;
    Ok(magnitude_to_bytes(&magnitude))
}

/// Low 256 bits of `magnitude`, little-endian
pub fn magnitude_to_bytes(magnitude: &BigUint) -> [u8; FELT_BYTES] {
    let le = magnitude.to_bytes_le();
    let len = le.len().min(FELT_BYTES);

    let mut bytes = [0u8; FELT_BYTES];
    bytes[..len].copy_from_slice(&le[..len]);
    bytes
}
