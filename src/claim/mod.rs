//! Proof and executable documents
//!
//! Only the fields the checks need are read:
//! - executable: `program.bytecode`
//! - proof: `claim.public_data.public_memory.{program, output}`
//!
//! Everything else in either document is ignored.

mod compare;

use serde::Deserialize;

pub use compare::{
    claimed_program_digest, compare_program_hashes, executable_program_digest, ProgramHashCheck,
};

use crate::error::{DocumentError, Result};
use crate::field::FeltValue;
use crate::memory::PublicMemoryValue;

/// Compiled Cairo executable
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExecutableDocument {
    #[serde(default)]
    pub program: ExecutableProgram,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExecutableProgram {
    /// Hex-encoded bytecode words, in program order
    #[serde(default)]
    pub bytecode: Vec<String>,
}

impl ExecutableDocument {
    pub fn from_json(json: &str) -> std::result::Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bytecode(&self) -> &[String] {
        &self.program.bytecode
    }
}

/// Serialized Cairo proof
#[derive(Clone, Debug, Deserialize)]
pub struct ProofDocument {
    pub claim: Claim,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Claim {
    pub public_data: PublicData,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PublicData {
    pub public_memory: PublicMemory,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PublicMemory {
    /// Program bytecode the proof claims was executed
    #[serde(default)]
    pub program: Vec<PublicMemoryValue>,
    /// Values the program wrote to its output segment
    #[serde(default)]
    pub output: Vec<PublicMemoryValue>,
}

impl ProofDocument {
    pub fn from_json(json: &str) -> std::result::Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn public_memory(&self) -> &PublicMemory {
        &self.claim.public_data.public_memory
    }

    /// Claimed output cells decoded as field elements, in output order.
    ///
    /// An empty list means the proof claims no outputs.
    pub fn claimed_outputs(&self, reduce: bool) -> Result<Vec<FeltValue>> {
        self.public_memory()
            .output
            .iter()
            .map(|cell| cell.to_felt(reduce))
            .collect()
    }

    /// Check the claimed program against `executable`'s bytecode
    pub fn check_program(&self, executable: &ExecutableDocument) -> Result<ProgramHashCheck> {
        compare_program_hashes(&self.public_memory().program, executable.bytecode())
    }
}
