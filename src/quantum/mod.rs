// src/quantum/mod.rs
//! Quantum computing primitives
//!
//! State vectors, the RY rotation gate and circuits built from it.

pub mod state;
pub mod gate;
pub mod circuit;

pub use state::StateVector;
pub use gate::{QuantumGate, RyGate};
pub use circuit::{QuantumCircuit, CircuitBuilder};
