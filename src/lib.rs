//! Cairo claim checker
//!
//! Checks what a Cairo proof claims against what the user actually supplied,
//! over the Stark field (p = 2^251 + 17 * 2^192 + 1).
//!
//! # Architecture
//!
//! The checker is split into small layers:
//! - Field codec: conversions between 32-byte little-endian buffers, 256-bit
//!   magnitudes and canonical field elements
//! - Memory adapter: public memory values emitted by the prover into buffers
//! - Digest: BLAKE2s accumulation over ordered buffers
//! - Claim: proof/executable documents and the program-hash comparison
//! - Engine: the opaque execute/prove/verify boundary and a session driver

pub mod claim;
pub mod config;
pub mod digest;
pub mod engine;
pub mod error;
pub mod field;
pub mod memory;

pub use claim::{compare_program_hashes, ExecutableDocument, ProgramHashCheck, ProofDocument};
pub use config::CheckerConfig;
pub use digest::{ProgramDigest, ProgramHasher};
pub use engine::{parse_arguments, ProvingEngine, Session};
pub use error::{ArgumentError, CodecError, DocumentError};
pub use field::{felt_to_bytes, hex_to_felt, FeltRadix, FeltValue, FELT_PRIME};
pub use memory::PublicMemoryValue;

/// Number of 32-bit words in a public memory value
pub const FELT_WORDS: usize = 8;

/// Serialized field element size in bytes
pub const FELT_BYTES: usize = 32;

/// Word size in bytes
pub const WORD_SIZE: usize = 4;
