use std::f64::consts::{FRAC_PI_2, PI};

use qlime::error::QLimeError;
use qlime::quantum::circuit::CircuitBuilder;
use qlime::simulators::{
    backend_for, ProbabilityBackend, ProductStateCalculator, StatevectorBackend,
    StatevectorSimulator,
};
use qlime::config::{BackendKind, ExplainerConfig, MAX_SUPPORTED_QUBITS};

/// Helper function for comparing f64 with tolerance
fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

fn assert_distributions_match(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(approx_eq(*x, *y, 1e-10), "basis state {}: {} != {}", i, x, y);
    }
}

#[test]
fn test_simulator_runs_ry_circuit() {
    let mut builder = CircuitBuilder::new(2);
    builder.ry(0, FRAC_PI_2).unwrap();
    let circuit = builder.build();

    let mut simulator = StatevectorSimulator::new(2);
    simulator.run_circuit(&circuit).unwrap();

    assert_eq!(simulator.qubit_count(), 2);
    assert_distributions_match(&simulator.probabilities(), &[0.5, 0.0, 0.5, 0.0]);
    assert!(simulator.state().is_valid());
}

#[test]
fn test_simulator_rejects_larger_circuit() {
    let builder = CircuitBuilder::new(3);
    let mut simulator = StatevectorSimulator::new(2);
    assert!(simulator.run_circuit(&builder.build()).is_err());
}

#[test]
fn test_full_rotation_gives_point_distribution() {
    // A full pi rotation sends a qubit to |1⟩ with certainty
    let backend = StatevectorBackend::default();
    let probabilities = backend.rotation_probabilities(&[PI, 0.0, PI]).unwrap();

    assert_eq!(probabilities.len(), 8);
    assert!(approx_eq(probabilities[0b101], 1.0, 1e-10));
    assert!(approx_eq(probabilities.iter().sum::<f64>(), 1.0, 1e-10));
}

#[test]
fn test_half_rotation_is_uniform_for_that_qubit() {
    let backend = StatevectorBackend::default();
    let probabilities = backend.rotation_probabilities(&[FRAC_PI_2, 0.0]).unwrap();

    assert_distributions_match(&probabilities, &[0.5, 0.0, 0.5, 0.0]);
}

#[test]
fn test_backends_agree() {
    let statevector = StatevectorBackend::default();
    let product = ProductStateCalculator::default();

    for angles in [
        vec![0.3],
        vec![FRAC_PI_2, 0.0, FRAC_PI_2],
        vec![0.1, 0.9, 1.7, 2.5],
        vec![PI, 0.25, 0.0, FRAC_PI_2, 1.0],
    ] {
        let a = statevector.rotation_probabilities(&angles).unwrap();
        let b = product.rotation_probabilities(&angles).unwrap();
        assert_distributions_match(&a, &b);
    }
}

#[test]
fn test_product_state_closed_form() {
    assert!(approx_eq(ProductStateCalculator::one_probability(0.0), 0.0, 1e-12));
    assert!(approx_eq(ProductStateCalculator::one_probability(FRAC_PI_2), 0.5, 1e-12));
    assert!(approx_eq(ProductStateCalculator::one_probability(PI), 1.0, 1e-12));
}

#[test]
fn test_register_limits() {
    let backend = StatevectorBackend::new(3);
    assert_eq!(backend.max_qubits(), 3);
    assert_eq!(
        backend.rotation_probabilities(&[0.0; 4]),
        Err(QLimeError::TooManyQubits { requested: 4, limit: 3 })
    );
    assert_eq!(backend.rotation_probabilities(&[]), Err(QLimeError::EmptyInput));

    let product = ProductStateCalculator::new(2);
    assert!(product.rotation_probabilities(&[0.0; 3]).is_err());
}

#[test]
fn test_backend_selection_from_config() {
    let config = ExplainerConfig {
        backend: BackendKind::ProductState,
        max_qubits: 7,
        ..ExplainerConfig::default()
    };
    let backend = backend_for(&config);
    assert_eq!(backend.name(), "product_state");
    assert_eq!(backend.max_qubits(), 7);

    let backend = backend_for(&ExplainerConfig::default());
    assert_eq!(backend.name(), "statevector");
}

#[test]
fn test_oversized_limits_are_clamped() {
    for max_qubits in [31, 64, usize::MAX] {
        let statevector = StatevectorBackend::new(max_qubits);
        let product = ProductStateCalculator::new(max_qubits);
        assert_eq!(statevector.max_qubits(), MAX_SUPPORTED_QUBITS);
        assert_eq!(product.max_qubits(), MAX_SUPPORTED_QUBITS);

        let expected = Err(QLimeError::TooManyQubits { requested: 64, limit: MAX_SUPPORTED_QUBITS });
        assert_eq!(statevector.rotation_probabilities(&[0.0; 64]), expected);
        assert_eq!(product.rotation_probabilities(&[0.0; 64]), expected);
    }
}
