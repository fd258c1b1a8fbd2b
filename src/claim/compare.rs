//! Program-hash comparison between a proof claim and an executable

use std::fmt;

use num_bigint::BigInt;

use crate::digest::{ProgramDigest, ProgramHasher};
use crate::error::Result;
use crate::field::{felt_to_bytes, hex_to_felt};
use crate::memory::PublicMemoryValue;

/// Outcome of comparing claimed and supplied program bytecode
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgramHashCheck {
    /// The proof carries no program bytecode at all
    NoClaim,
    Match {
        claimed: ProgramDigest,
        executable: ProgramDigest,
    },
    Mismatch {
        claimed: ProgramDigest,
        executable: ProgramDigest,
    },
}

impl ProgramHashCheck {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    /// `(claimed, executable)` digests, when a claim was present
    pub fn digests(&self) -> Option<(&ProgramDigest, &ProgramDigest)> {
        match self {
            Self::NoClaim => None,
            Self::Match {
                claimed,
                executable,
            }
            | Self::Mismatch {
                claimed,
                executable,
            } => Some((claimed, executable)),
        }
    }
}

impl fmt::Display for ProgramHashCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoClaim => f.write_str("no claim"),
            Self::Match { .. } => f.write_str("match"),
            Self::Mismatch { .. } => f.write_str("mismatch"),
        }
    }
}

/// Digest of the bytecode a proof claims to have executed
pub fn claimed_program_digest(claimed: &[PublicMemoryValue]) -> Result<ProgramDigest> {
    let mut hasher = ProgramHasher::new();
    for cell in claimed {
        hasher.update(cell.to_bytes_le()?);
    }
    Ok(hasher.finalize())
}

/// Digest of an executable's hex bytecode words
pub fn executable_program_digest<S: AsRef<str>>(bytecode: &[S]) -> Result<ProgramDigest> {
    let mut hasher = ProgramHasher::new();
    for word in bytecode {
        let felt = BigInt::from(hex_to_felt(word.as_ref())?);
        hasher.update(felt_to_bytes(&felt)?);
    }
    Ok(hasher.finalize())
}

/// Compare the claimed program against the supplied executable bytecode.
///
/// An empty claim short-circuits to [`ProgramHashCheck::NoClaim`] without
/// looking at the executable.
pub fn compare_program_hashes<S: AsRef<str>>(
    claimed: &[PublicMemoryValue],
    bytecode: &[S],
) -> Result<ProgramHashCheck> {
    if claimed.is_empty() {
        return Ok(ProgramHashCheck::NoClaim);
    }

    let claimed = claimed_program_digest(claimed)?;
    let executable = executable_program_digest(bytecode)?;

    Ok(if claimed == executable {
        ProgramHashCheck::Match {
            claimed,
            executable,
        }
    } else {
        ProgramHashCheck::Mismatch {
            claimed,
            executable,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    fn cell(first: u64) -> PublicMemoryValue {
        PublicMemoryValue::new(0, vec![first, 0, 0, 0, 0, 0, 0, 0])
    }

    #[test]
    fn same_program_matches() {
        let check = compare_program_hashes(&[cell(1)], &["0x1"]).unwrap();
        assert!(check.is_match());
        let (claimed, executable) = check.digests().unwrap();
        assert_eq!(claimed, executable);
    }

    #[test]
    fn different_program_mismatches() {
        let check = compare_program_hashes(&[cell(2)], &["0x1"]).unwrap();
        assert!(matches!(check, ProgramHashCheck::Mismatch { .. }));
        let (claimed, executable) = check.digests().unwrap();
        assert_ne!(claimed, executable);
        assert_eq!(check.to_string(), "mismatch");
    }

    #[test]
    fn empty_claim_is_no_claim() {
        let check = compare_program_hashes(&[], &["0x1"]).unwrap();
        assert_eq!(check, ProgramHashCheck::NoClaim);
        assert!(check.digests().is_none());
    }

    #[test]
    fn empty_claim_skips_executable_validation() {
        let check = compare_program_hashes(&[], &["not hex"]).unwrap();
        assert_eq!(check, ProgramHashCheck::NoClaim);
    }

    #[test]
    fn malformed_cell_is_an_error() {
        let short = PublicMemoryValue::new(0, vec![1, 0, 0, 0, 0, 0, 0]);
        let err = compare_program_hashes(&[short], &["0x1"]).unwrap_err();
        assert_eq!(err, CodecError::InvalidShape { expected: 8, actual: 7 });
    }

    #[test]
    fn malformed_executable_word_is_an_error() {
        let err = compare_program_hashes(&[cell(1)], &["0xq"]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidFormat { .. }));
    }

    #[test]
    fn order_matters() {
        let claimed = [cell(1), cell(2)];
        assert!(compare_program_hashes(&claimed, &["0x1", "0x2"]).unwrap().is_match());
        assert!(!compare_program_hashes(&claimed, &["0x2", "0x1"]).unwrap().is_match());
    }

    #[test]
    fn negative_words_use_field_representative() {
        // -1 mod p = p - 1 = 2^251 + 17 * 2^192
        let minus_one = PublicMemoryValue::new(0, vec![0, 0, 0, 0, 0, 0, 17, 1 << 27]);
        assert!(compare_program_hashes(&[minus_one], &["-0x1"]).unwrap().is_match());
    }
}
