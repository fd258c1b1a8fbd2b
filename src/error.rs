//! Error types for the claim checker

use thiserror::Error;

/// Malformed input to the field codec or the memory adapter.
///
/// These are never transient: callers propagate them as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("expected {expected} words, got {actual}")]
    InvalidShape { expected: usize, actual: usize },
    #[error("expected a {expected}-byte buffer, got {actual} bytes")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid hex string {input:?}: {reason}")]
    InvalidFormat { input: String, reason: &'static str },
    #[error("field element must be non-negative")]
    InvalidDomain,
}

/// Failure to read a proof or executable document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected program argument list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("empty argument found")]
    Empty,
    #[error("invalid argument: {0:?} is not a valid integer")]
    NotAnInteger(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
