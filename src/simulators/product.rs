//! Closed-form probabilities for independent single-qubit rotations
//!
//! A register prepared by one RY rotation per qubit is a product state, and
//! qubit `q` reads 1 with probability `sin^2(angle_q / 2)`. The joint
//! distribution is the product of the marginals, laid out with the same
//! big-endian basis ordering as the statevector simulator.

use crate::error::Result;

use super::{check_register, effective_limit, ProbabilityBackend};

#[derive(Debug, Clone, Copy)]
pub struct ProductStateCalculator {
    max_qubits: usize,
}

impl ProductStateCalculator {
    /// Limits above [`MAX_SUPPORTED_QUBITS`](crate::config::MAX_SUPPORTED_QUBITS)
    /// are clamped
    pub fn new(max_qubits: usize) -> Self {
        ProductStateCalculator { max_qubits: effective_limit(max_qubits) }
    }

    /// Probability that a qubit rotated by `angle` is measured as 1
    pub fn one_probability(angle: f64) -> f64 {
        let half = (angle / 2.0).sin();
        half * half
    }
}

impl Default for ProductStateCalculator {
    fn default() -> Self {
        ProductStateCalculator::new(20)
    }
}

impl ProbabilityBackend for ProductStateCalculator {
    fn name(&self) -> &'static str {
        "product_state"
    }

    fn max_qubits(&self) -> usize {
        self.max_qubits
    }

    fn rotation_probabilities(&self, angles: &[f64]) -> Result<Vec<f64>> {
        check_register(angles.len(), self.max_qubits)?;

        // Each qubit appended as the new least significant bit
        let mut probabilities = vec![1.0];
        for &angle in angles {
            let p_one = Self::one_probability(angle);
            probabilities = probabilities
                .iter()
                .flat_map(|&p| [p * (1.0 - p_one), p * p_one])
                .collect();
        }

        Ok(probabilities)
    }
}
