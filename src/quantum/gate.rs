// src/quantum/gate.rs
//! Quantum gates implementation
//!
//! The encoding circuit only needs RY rotations, so gates here are 2x2
//! unitaries applied to one qubit of a register.

use std::fmt::Debug;
use num_complex::Complex64;
use ndarray::{array, Array2};

use super::state::StateVector;

/// Trait for quantum gates
pub trait QuantumGate: Debug + Send + Sync {
    /// Returns the number of qubits this gate acts on
    fn qubit_count(&self) -> usize;

    /// Returns the matrix representation of this gate
    fn matrix(&self) -> Array2<Complex64>;

    /// Returns a display name for this gate
    fn name(&self) -> String;

    /// Create a clone of this gate
    fn clone_box(&self) -> Box<dyn QuantumGate>;

    /// Apply the gate to the given qubits of a state
    fn apply_to_qubits(&self, state: &StateVector, qubits: &[usize]) -> Result<StateVector, String> {
        if qubits.len() != self.qubit_count() {
            return Err(format!(
                "Gate {} acts on {} qubits, but {} qubits were specified",
                self.name(), self.qubit_count(), qubits.len()
            ));
        }

        match qubits {
            [qubit] => state.apply_single_qubit(&self.matrix(), *qubit),
            _ => Err(format!("Gate {} is not a single-qubit gate", self.name())),
        }
    }
}

impl Clone for Box<dyn QuantumGate> {
    fn clone(&self) -> Box<dyn QuantumGate> {
        self.clone_box()
    }
}

/// Rotation around the Y axis by `theta` radians
///
/// `RY(theta)|0⟩ = cos(theta/2)|0⟩ + sin(theta/2)|1⟩`, so the rotated qubit
/// reads 1 with probability `sin^2(theta/2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RyGate(pub f64);

impl RyGate {
    /// The rotation angle in radians
    pub fn angle(&self) -> f64 {
        self.0
    }
}

impl QuantumGate for RyGate {
    fn qubit_count(&self) -> usize {
        1
    }

    fn matrix(&self) -> Array2<Complex64> {
        let cos = (self.0 / 2.0).cos();
        let sin = (self.0 / 2.0).sin();
        array![
            [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
            [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)]
        ]
    }

    fn name(&self) -> String {
        format!("Ry({:.2})", self.0)
    }

    fn clone_box(&self) -> Box<dyn QuantumGate> {
        Box::new(*self)
    }
}
