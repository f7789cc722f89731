// src/quantum/circuit.rs
use crate::quantum::gate::{QuantumGate, RyGate};
use crate::quantum::state::StateVector;

/// A quantum circuit consisting of a sequence of gates
#[derive(Debug, Clone)]
pub struct QuantumCircuit {
    pub gates: Vec<(Box<dyn QuantumGate>, Vec<usize>)>,
    pub qubit_count: usize,
}

impl QuantumCircuit {
    /// Create a new empty quantum circuit
    pub fn new(qubit_count: usize) -> Self {
        QuantumCircuit {
            gates: Vec::new(),
            qubit_count,
        }
    }

    pub fn add_gate(&mut self, gate: Box<dyn QuantumGate>, qubits: &[usize]) -> Result<(), String> {
        for &q in qubits {
            if q >= self.qubit_count {
                return Err(format!("Qubit index {} out of range", q));
            }
        }

        if gate.qubit_count() != qubits.len() {
            return Err(format!(
                "Gate acts on {} qubits, but {} qubits were specified",
                gate.qubit_count(), qubits.len()
            ));
        }

        self.gates.push((gate, qubits.to_vec()));
        Ok(())
    }

    /// Get the number of gates in the circuit
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Apply the circuit to a quantum state
    pub fn apply(&self, state: &StateVector) -> Result<StateVector, String> {
        if state.qubit_count() < self.qubit_count {
            return Err(format!(
                "State has {} qubits, but circuit requires at least {} qubits",
                state.qubit_count(), self.qubit_count
            ));
        }

        let mut current_state = state.clone();
        for (gate, qubits) in &self.gates {
            current_state = gate.apply_to_qubits(&current_state, qubits)?;
        }

        Ok(current_state)
    }
}

/// Builder for assembling circuits gate by gate
pub struct CircuitBuilder {
    circuit: QuantumCircuit,
}

impl CircuitBuilder {
    /// Start a circuit on `qubit_count` qubits
    pub fn new(qubit_count: usize) -> Self {
        CircuitBuilder {
            circuit: QuantumCircuit::new(qubit_count),
        }
    }

    pub fn build(self) -> QuantumCircuit {
        self.circuit
    }

    pub fn add_gate<G: QuantumGate + 'static>(&mut self, gate: G, qubits: &[usize]) -> Result<(), String> {
        self.circuit.add_gate(Box::new(gate), qubits)
    }

    pub fn ry(&mut self, qubit: usize, theta: f64) -> Result<(), String> {
        self.add_gate(RyGate(theta), &[qubit])
    }

    /// One RY rotation per qubit, qubit `i` rotated by `angles[i]`
    pub fn ry_layer(&mut self, angles: &[f64]) -> Result<(), String> {
        for (qubit, &theta) in angles.iter().enumerate() {
            self.ry(qubit, theta)?;
        }
        Ok(())
    }
}
