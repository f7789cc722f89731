//! Statevector simulator
//!
//! Exact, noiseless execution of circuits on a full state vector. Reading
//! probabilities off the final state corresponds to infinite shots.
use crate::error::{QLimeError, Result};
use crate::quantum::circuit::{CircuitBuilder, QuantumCircuit};
use crate::quantum::state::StateVector;

use super::{check_register, effective_limit, ProbabilityBackend};

/// A statevector simulator for quantum circuits
#[derive(Clone, Debug)]
pub struct StatevectorSimulator {
    /// The current state of the simulator
    state: StateVector,
}

impl StatevectorSimulator {
    /// Create a new statevector simulator with the specified number of qubits
    pub fn new(qubit_count: usize) -> Self {
        StatevectorSimulator {
            state: StateVector::zero_state(qubit_count),
        }
    }

    /// Get the current state vector
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Get the number of qubits in the simulator
    pub fn qubit_count(&self) -> usize {
        self.state.qubit_count()
    }

    /// Apply a quantum circuit gate by gate
    pub fn run_circuit(&mut self, circuit: &QuantumCircuit) -> std::result::Result<(), String> {
        if circuit.qubit_count > self.qubit_count() {
            return Err(format!(
                "Circuit has {} qubits, but simulator has only {} qubits",
                circuit.qubit_count,
                self.qubit_count()
            ));
        }

        self.state = circuit.apply(&self.state)?;
        Ok(())
    }

    /// Probabilities of all basis states without collapsing the state
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }
}

/// Probability backend that runs the RY encoding circuit on a fresh
/// [`StatevectorSimulator`] for every request
#[derive(Debug, Clone, Copy)]
pub struct StatevectorBackend {
    max_qubits: usize,
}

impl StatevectorBackend {
    /// Limits above [`MAX_SUPPORTED_QUBITS`](crate::config::MAX_SUPPORTED_QUBITS)
    /// are clamped
    pub fn new(max_qubits: usize) -> Self {
        StatevectorBackend { max_qubits: effective_limit(max_qubits) }
    }
}

impl Default for StatevectorBackend {
    fn default() -> Self {
        StatevectorBackend::new(20)
    }
}

impl ProbabilityBackend for StatevectorBackend {
    fn name(&self) -> &'static str {
        "statevector"
    }

    fn max_qubits(&self) -> usize {
        self.max_qubits
    }

    fn rotation_probabilities(&self, angles: &[f64]) -> Result<Vec<f64>> {
        check_register(angles.len(), self.max_qubits)?;

        let mut builder = CircuitBuilder::new(angles.len());
        builder.ry_layer(angles).map_err(QLimeError::Simulation)?;
        let circuit = builder.build();

        let mut simulator = StatevectorSimulator::new(angles.len());
        simulator.run_circuit(&circuit).map_err(QLimeError::Simulation)?;

        Ok(simulator.probabilities())
    }
}
