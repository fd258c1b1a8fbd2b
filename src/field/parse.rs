//! Hex words as they appear in compiled executables

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;

use super::FELT_PRIME;
use crate::error::{CodecError, Result};

/// Parse a signed, optionally `0x`-prefixed hex word into a canonical felt.
///
/// A blank string is zero, but a sign followed by nothing is an error.
/// Negative values map to their positive representative mod the prime.
pub fn hex_to_felt(input: &str) -> Result<BigUint> {
    let trimmed = trim_word(input);
    if trimmed.is_empty() {
        return Ok(BigUint::zero());
    }

    let (negative, unsigned) = match trimmed.strip_prefix(&['+', '-'][..]) {
        Some(rest) => {
            let rest = trim_word(rest);
            if rest.is_empty() {
                return Err(invalid(input, "no digits after sign"));
            }
            (trimmed.starts_with('-'), rest)
        }
        None => (false, trimmed),
    };

    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }

    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };
    let bytes = decoded.map_err(|_| invalid(input, "not a hex number"))?;

    let sign = if negative { Sign::Minus } else { Sign::Plus };
    let raw = BigInt::from_biguint(sign, BigUint::from_bytes_be(&bytes));
    let prime = BigInt::from(FELT_PRIME.clone());
    let (_, canonical) = raw.mod_floor(&prime).into_parts();
    Ok(canonical)
}

/// Trim whitespace and byte-order marks, which pasted words often carry
fn trim_word(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn invalid(input: &str, reason: &'static str) -> CodecError {
    CodecError::InvalidFormat {
        input: input.to_string(),
        reason,
    }
}
