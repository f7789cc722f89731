//! Probability backends
//!
//! The explainer only needs one capability from a simulator: given one RY
//! rotation angle per qubit, return the exact probability of every basis
//! state. [`ProbabilityBackend`] captures that, with a statevector
//! implementation and a closed-form one.

pub mod statevector;
pub mod product;

pub use statevector::{StatevectorSimulator, StatevectorBackend};
pub use product::ProductStateCalculator;

use crate::config::{BackendKind, ExplainerConfig, MAX_SUPPORTED_QUBITS};
use crate::error::{QLimeError, Result};

/// Exact probability source for the feature encoding circuit
pub trait ProbabilityBackend: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Largest register this backend accepts
    fn max_qubits(&self) -> usize;

    /// Apply `RY(angles[q])` to qubit `q` of |0...0⟩ and return the
    /// probabilities of all `2^n` basis states, qubit 0 most significant
    fn rotation_probabilities(&self, angles: &[f64]) -> Result<Vec<f64>>;
}

/// Build the backend selected in the configuration
pub fn backend_for(config: &ExplainerConfig) -> Box<dyn ProbabilityBackend> {
    match config.backend {
        BackendKind::Statevector => Box::new(StatevectorBackend::new(config.max_qubits)),
        BackendKind::ProductState => Box::new(ProductStateCalculator::new(config.max_qubits)),
    }
}

/// Register limit a backend actually enforces, never above
/// [`MAX_SUPPORTED_QUBITS`]
pub(crate) fn effective_limit(max_qubits: usize) -> usize {
    max_qubits.min(MAX_SUPPORTED_QUBITS)
}

pub(crate) fn check_register(qubits: usize, limit: usize) -> Result<()> {
    let limit = effective_limit(limit);
    if qubits == 0 {
        return Err(QLimeError::EmptyInput);
    }
    if qubits > limit {
        return Err(QLimeError::TooManyQubits { requested: qubits, limit });
    }
    Ok(())
}
