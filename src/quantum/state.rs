// src/quantum/state.rs
//! Quantum state representations
//!
//! Basis states are labelled big-endian: qubit 0 is the most significant
//! bit of the basis index, so in an `n`-qubit register qubit `q` of basis
//! state `b` is `(b >> (n - 1 - q)) & 1`.

use num_complex::Complex64;
use ndarray::{Array1, Array2};

/// State vector representation of a quantum state
#[derive(Clone, Debug)]
pub struct StateVector {
    /// Number of qubits
    pub qubit_count: usize,

    /// The state vector as an array of complex amplitudes
    amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Create the zero state |00...0⟩
    pub fn zero_state(qubit_count: usize) -> Self {
        let mut amplitudes = Array1::zeros(1 << qubit_count);
        amplitudes[0] = Complex64::new(1.0, 0.0);

        StateVector {
            qubit_count,
            amplitudes,
        }
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Dimension of the Hilbert space (2^n for n qubits)
    pub fn dimension(&self) -> usize {
        1 << self.qubit_count
    }

    /// Check that the amplitudes are normalized
    pub fn is_valid(&self) -> bool {
        let norm_sqr: f64 = self.amplitudes
            .iter()
            .map(|amp| amp.norm_sqr())
            .sum();

        (norm_sqr - 1.0).abs() < 1e-10
    }

    /// Calculate the probability of measuring the given bit string
    pub fn probability(&self, bit_string: usize) -> f64 {
        if bit_string >= self.dimension() {
            return 0.0;
        }

        self.amplitudes[bit_string].norm_sqr()
    }

    /// Born-rule probabilities of every basis state, in basis-index order
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).collect()
    }

    /// Get a reference to the amplitudes
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Apply a 2x2 unitary to one qubit of this state
    ///
    /// Amplitudes are updated pairwise, so the cost is linear in the
    /// dimension rather than building the full 2^n x 2^n operator.
    pub fn apply_single_qubit(&self, matrix: &Array2<Complex64>, qubit: usize) -> Result<Self, String> {
        if matrix.shape() != [2, 2] {
            return Err(format!(
                "Single-qubit gate must be 2x2, got {}x{}",
                matrix.shape()[0], matrix.shape()[1]
            ));
        }
        if qubit >= self.qubit_count {
            return Err(format!("Qubit index {} out of range", qubit));
        }

        let stride = 1 << (self.qubit_count - 1 - qubit);
        let mut new_amplitudes = self.amplitudes.clone();

        for i in 0..self.dimension() {
            if i & stride != 0 {
                continue;
            }
            let j = i | stride;
            let a0 = self.amplitudes[i];
            let a1 = self.amplitudes[j];
            new_amplitudes[i] = matrix[[0, 0]] * a0 + matrix[[0, 1]] * a1;
            new_amplitudes[j] = matrix[[1, 0]] * a0 + matrix[[1, 1]] * a1;
        }

        Ok(StateVector {
            qubit_count: self.qubit_count,
            amplitudes: new_amplitudes,
        })
    }
}
