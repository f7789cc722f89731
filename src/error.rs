//! Error types for Q-LIME explanations

use thiserror::Error;

/// Errors raised while encoding, measuring, explaining or rendering
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QLimeError {
    /// A feature vector with no entries was supplied
    #[error("feature vector is empty")]
    EmptyInput,

    /// Two positionally aligned sequences differ in length
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        context: &'static str,
    },

    /// A value lies outside the domain the encoding accepts
    #[error("input range error: {0}")]
    InputRange(String),

    /// An index does not address an element of its sequence
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The register would exceed the backend's qubit limit
    #[error("{requested} qubits requested, backend limit is {limit}")]
    TooManyQubits { requested: usize, limit: usize },

    /// A probability distribution cannot be sampled
    #[error("invalid probability distribution: {0}")]
    InvalidDistribution(String),

    /// Failure inside the circuit simulator
    #[error("simulation error: {0}")]
    Simulation(String),

    /// Configuration could not be loaded or failed validation
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QLimeError>;

/// Check that two aligned sequences have the same length
pub(crate) fn ensure_same_len(expected: usize, actual: usize, context: &'static str) -> Result<()> {
    if expected != actual {
        return Err(QLimeError::DimensionMismatch { expected, actual, context });
    }
    Ok(())
}
