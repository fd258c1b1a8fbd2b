//! Boundary to the external Cairo proving engine
//!
//! The engine executes, proves and verifies; all three are opaque here.
//! Blobs go in and out as serialized JSON strings and only the documents
//! in [`crate::claim`] are ever looked inside.

mod args;
mod session;

use num_bigint::BigInt;

pub use args::parse_arguments;
pub use session::{Execution, ProofReport, ProofRun, Session, SessionError, Verification};

/// Common interface for proving engines
pub trait ProvingEngine {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run `executable` on `args`, returning the serialized prover input
    fn execute(&self, executable: &str, args: &[BigInt]) -> Result<String, Self::Error>;

    /// Prove a prior execution, returning the serialized proof
    fn prove(&self, prover_input: &str) -> Result<String, Self::Error>;

    /// Check a serialized proof. `with_pedersen` selects the verifier for
    /// executions that used the Pedersen builtin.
    fn verify(&self, proof: &str, with_pedersen: bool) -> Result<bool, Self::Error>;

    /// Whether the execution used the Pedersen builtin
    fn contains_pedersen_builtin(&self, _prover_input: &str) -> bool {
        false
    }
}
