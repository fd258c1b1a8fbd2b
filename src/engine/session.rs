//! Execute, prove and verify one executable through an engine

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::ProvingEngine;
use crate::claim::{ExecutableDocument, ProgramHashCheck, ProofDocument};
use crate::config::CheckerConfig;
use crate::error::{CodecError, DocumentError};
use crate::field::FeltValue;

#[derive(Error, Debug)]
pub enum SessionError<E> {
    #[error("nothing executed yet")]
    NotExecuted,
    #[error("nothing proved yet")]
    NotProved,
    #[error("proving engine failed")]
    Engine(#[source] E),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result of running the executable
#[derive(Clone, Debug)]
pub struct Execution {
    pub prover_input: String,
    pub elapsed: Duration,
    pub with_pedersen: bool,
}

/// Result of proving the last execution
#[derive(Clone, Debug)]
pub struct ProofRun {
    pub proof: String,
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug)]
pub struct Verification {
    pub verified: bool,
    pub elapsed: Duration,
}

/// What the proof claims, checked against the session's executable
#[derive(Clone, Debug)]
pub struct ProofReport {
    pub outputs: Vec<FeltValue>,
    pub program: ProgramHashCheck,
}

/// One executable moving through execute -> prove -> verify.
///
/// A successful re-execution discards any earlier proof; a failed one leaves
/// the session untouched.
pub struct Session<E> {
    engine: E,
    executable: String,
    execution: Option<Execution>,
    proof: Option<ProofRun>,
}

impl<E: ProvingEngine> Session<E> {
    pub fn new(engine: E, executable: impl Into<String>) -> Self {
        Self {
            engine,
            executable: executable.into(),
            execution: None,
            proof: None,
        }
    }

    pub fn execution(&self) -> Option<&Execution> {
        self.execution.as_ref()
    }

    pub fn proof(&self) -> Option<&ProofRun> {
        self.proof.as_ref()
    }

    pub fn execute(&mut self, args: &[BigInt]) -> Result<&Execution, SessionError<E::Error>> {
        debug!(num_args = args.len(), "executing program");

        let start = Instant::now();
        let prover_input = self
            .engine
            .execute(&self.executable, args)
            .map_err(SessionError::Engine)?;
        let elapsed = start.elapsed();
        self.proof = None;

        let with_pedersen = self.engine.contains_pedersen_builtin(&prover_input);
        info!(?elapsed, with_pedersen, "execution completed");

        Ok(&*self.execution.insert(Execution {
            prover_input,
            elapsed,
            with_pedersen,
        }))
    }

    pub fn prove(&mut self) -> Result<&ProofRun, SessionError<E::Error>> {
        let execution = self.execution.as_ref().ok_or(SessionError::NotExecuted)?;

        let start = Instant::now();
        let proof = self
            .engine
            .prove(&execution.prover_input)
            .map_err(SessionError::Engine)?;
        let elapsed = start.elapsed();
        info!(?elapsed, proof_bytes = proof.len(), "proof generated");

        Ok(&*self.proof.insert(ProofRun { proof, elapsed }))
    }

    pub fn verify(&self) -> Result<Verification, SessionError<E::Error>> {
        let run = self.proof.as_ref().ok_or(SessionError::NotProved)?;
        let with_pedersen = self.execution.as_ref().map_or(false, |e| e.with_pedersen);

        let start = Instant::now();
        let verified = self
            .engine
            .verify(&run.proof, with_pedersen)
            .map_err(SessionError::Engine)?;
        let elapsed = start.elapsed();

        if verified {
            info!(?elapsed, with_pedersen, "proof verified");
        } else {
            warn!(?elapsed, with_pedersen, "proof rejected");
        }
        Ok(Verification { verified, elapsed })
    }

    /// Decode the proof's claimed outputs and check its program hash
    pub fn inspect(&self, config: &CheckerConfig) -> Result<ProofReport, SessionError<E::Error>> {
        let run = self.proof.as_ref().ok_or(SessionError::NotProved)?;

        let proof = ProofDocument::from_json(&run.proof)?;
        let executable = ExecutableDocument::from_json(&self.executable)?;

        let outputs = proof.claimed_outputs(config.reduce_outputs)?;
        let program = proof.check_program(&executable)?;
        match &program {
            ProgramHashCheck::NoClaim => warn!("proof carries no program bytecode"),
            ProgramHashCheck::Match { claimed, .. } => info!(%claimed, "program hash matches"),
            ProgramHashCheck::Mismatch { claimed, executable } => {
                warn!(%claimed, %executable, "program hash mismatch")
            }
        }

        Ok(ProofReport { outputs, program })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fmt;

    use num_bigint::BigUint;

    use super::*;

    #[derive(Debug)]
    struct EngineFault;

    impl fmt::Display for EngineFault {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("engine fault")
        }
    }

    impl std::error::Error for EngineFault {}

    /// Argument value the engine refuses to execute
    const FAULTY_ARG: i64 = 13;

    /// Claims bytecode `[0x1]` and outputs the sum of the arguments
    #[derive(Default)]
    struct SumEngine {
        proofs: Cell<usize>,
        pedersen: bool,
        verified_with_pedersen: Cell<Option<bool>>,
    }

    impl ProvingEngine for SumEngine {
        type Error = EngineFault;

        fn execute(&self, _executable: &str, args: &[BigInt]) -> Result<String, EngineFault> {
            if args.contains(&BigInt::from(FAULTY_ARG)) {
                return Err(EngineFault);
            }
            let sum: BigInt = args.iter().sum();
            Ok(sum.to_string())
        }

        fn prove(&self, prover_input: &str) -> Result<String, EngineFault> {
            self.proofs.set(self.proofs.get() + 1);
            let sum: u64 = prover_input.parse().map_err(|_| EngineFault)?;
            Ok(format!(
                r#"{{"claim":{{"public_data":{{"public_memory":{{
                    "program":[[0,[1,0,0,0,0,0,0,0]]],
                    "output":[[1,[{sum},0,0,0,0,0,0,0]]]}}}}}}}}"#
            ))
        }

        fn verify(&self, proof: &str, with_pedersen: bool) -> Result<bool, EngineFault> {
            self.verified_with_pedersen.set(Some(with_pedersen));
            Ok(proof.contains("claim"))
        }

        fn contains_pedersen_builtin(&self, _prover_input: &str) -> bool {
            self.pedersen
        }
    }

    const EXECUTABLE: &str = r#"{"program":{"bytecode":["0x1"]}}"#;

    #[test]
    fn runs_full_pipeline() {
        let mut session = Session::new(SumEngine::default(), EXECUTABLE);
        session.execute(&[BigInt::from(2), BigInt::from(3)]).unwrap();
        session.prove().unwrap();
        assert!(session.verify().unwrap().verified);

        let report = session.inspect(&CheckerConfig::default()).unwrap();
        assert_eq!(report.outputs.len(), 1);
        assert_eq!(report.outputs[0].value, BigUint::from(5u32));
        assert!(report.program.is_match());
    }

    #[test]
    fn prove_requires_execution() {
        let mut session = Session::new(SumEngine::default(), EXECUTABLE);
        assert!(matches!(session.prove(), Err(SessionError::NotExecuted)));
        assert!(matches!(session.verify(), Err(SessionError::NotProved)));
        assert!(matches!(
            session.inspect(&CheckerConfig::default()),
            Err(SessionError::NotProved)
        ));
    }

    #[test]
    fn re_execution_discards_proof() {
        let mut session = Session::new(SumEngine::default(), EXECUTABLE);
        session.execute(&[BigInt::from(1)]).unwrap();
        session.prove().unwrap();
        assert!(session.proof().is_some());

        session.execute(&[BigInt::from(4)]).unwrap();
        assert!(session.proof().is_none());
        assert_eq!(session.execution().unwrap().prover_input, "4");
    }

    #[test]
    fn engine_errors_propagate() {
        let mut session = Session::new(SumEngine::default(), EXECUTABLE);
        session.execute(&[BigInt::from(-1)]).unwrap();
        assert!(matches!(session.prove(), Err(SessionError::Engine(EngineFault))));
        assert_eq!(session.engine.proofs.get(), 1);
    }

    #[test]
    fn mismatched_executable_is_reported() {
        let mut session = Session::new(SumEngine::default(), r#"{"program":{"bytecode":["0x2"]}}"#);
        session.execute(&[]).unwrap();
        session.prove().unwrap();
        let report = session.inspect(&CheckerConfig::default()).unwrap();
        assert!(matches!(report.program, ProgramHashCheck::Mismatch { .. }));
    }

    #[test]
    fn verify_receives_pedersen_flag_from_execution() {
        let engine = SumEngine {
            pedersen: true,
            ..SumEngine::default()
        };
        let mut session = Session::new(engine, EXECUTABLE);
        assert!(session.execute(&[BigInt::from(1)]).unwrap().with_pedersen);
        session.prove().unwrap();
        session.verify().unwrap();
        assert_eq!(session.engine.verified_with_pedersen.get(), Some(true));
    }

    #[test]
    fn verify_without_pedersen_passes_false() {
        let mut session = Session::new(SumEngine::default(), EXECUTABLE);
        session.execute(&[BigInt::from(1)]).unwrap();
        session.prove().unwrap();
        session.verify().unwrap();
        assert_eq!(session.engine.verified_with_pedersen.get(), Some(false));
    }

    #[test]
    fn failed_re_execution_keeps_previous_state() {
        let mut session = Session::new(SumEngine::default(), EXECUTABLE);
        session.execute(&[BigInt::from(2)]).unwrap();
        session.prove().unwrap();

        assert!(matches!(
            session.execute(&[BigInt::from(FAULTY_ARG)]),
            Err(SessionError::Engine(EngineFault))
        ));
        assert_eq!(session.execution().unwrap().prover_input, "2");
        assert!(session.proof().is_some());
        assert!(session.verify().unwrap().verified);
    }
}
