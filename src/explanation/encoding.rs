//! Angle encoding of feature vectors
//!
//! Feature `i` drives qubit `i` with `RY(value * pi/2)`: 0 leaves the qubit
//! in |0⟩ and 1 puts it in an equal superposition, so it reads 1 with
//! probability 0.5. Flipping an active feature drops its rotation, which
//! leaves that qubit in |0⟩ as if the feature were off.

use std::f64::consts::FRAC_PI_2;

use tracing::warn;

use crate::error::{QLimeError, Result};
use crate::simulators::ProbabilityBackend;

/// Tolerance for a distribution summing to one
const NORMALIZATION_TOLERANCE: f64 = 1e-10;

/// Reject empty vectors and values outside `[0, 1]`
pub fn validate_features(features: &[f64]) -> Result<()> {
    if features.is_empty() {
        return Err(QLimeError::EmptyInput);
    }

    if let Some((i, value)) = features
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0 || **v > 1.0)
    {
        return Err(QLimeError::InputRange(format!(
            "feature {} has value {}, expected a value in [0, 1]",
            i, value
        )));
    }

    Ok(())
}

/// Rotation angle of every qubit, with the flip applied
///
/// The flip only zeroes the angle when the flipped feature is exactly 1;
/// any other value keeps its regular rotation.
pub fn rotation_angles(features: &[f64], flip_index: Option<usize>) -> Result<Vec<f64>> {
    validate_features(features)?;

    if let Some(index) = flip_index {
        if index >= features.len() {
            return Err(QLimeError::IndexOutOfRange { index, len: features.len() });
        }
    }

    Ok(features
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            if Some(i) == flip_index && value == 1.0 {
                0.0
            } else {
                value * FRAC_PI_2
            }
        })
        .collect())
}

/// Encode `features` (optionally flipping one) and return the exact
/// probability of each of the `2^n` basis states
pub fn encode_and_flip(
    backend: &dyn ProbabilityBackend,
    features: &[f64],
    flip_index: Option<usize>,
) -> Result<Vec<f64>> {
    let angles = rotation_angles(features, flip_index)?;
    let probabilities = backend.rotation_probabilities(&angles)?;

    let expected = u32::try_from(features.len())
        .ok()
        .and_then(|n| 1usize.checked_shl(n));
    if expected != Some(probabilities.len()) {
        return Err(QLimeError::InvalidDistribution(format!(
            "backend {} returned {} probabilities for {} qubits",
            backend.name(),
            probabilities.len(),
            features.len()
        )));
    }

    let total: f64 = probabilities.iter().sum();
    if (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
        warn!(backend = backend.name(), total, "probability distribution is not normalized");
    }

    Ok(probabilities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angles_follow_feature_values() {
        let angles = rotation_angles(&[1.0, 0.0, 0.5], None).unwrap();
        assert_eq!(angles, vec![FRAC_PI_2, 0.0, 0.25 * std::f64::consts::PI]);
    }

    #[test]
    fn test_flip_zeroes_only_active_feature() {
        assert_eq!(rotation_angles(&[1.0, 1.0], Some(0)).unwrap(), vec![0.0, FRAC_PI_2]);
        // Inactive and fractional features keep their angle
        assert_eq!(rotation_angles(&[0.0, 1.0], Some(0)).unwrap(), vec![0.0, FRAC_PI_2]);
        assert_eq!(rotation_angles(&[0.5], Some(0)).unwrap(), vec![0.5 * FRAC_PI_2]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(rotation_angles(&[], None), Err(QLimeError::EmptyInput));
        assert!(matches!(rotation_angles(&[1.5], None), Err(QLimeError::InputRange(_))));
        assert!(matches!(rotation_angles(&[f64::NAN], None), Err(QLimeError::InputRange(_))));
        assert_eq!(
            rotation_angles(&[1.0, 0.0], Some(2)),
            Err(QLimeError::IndexOutOfRange { index: 2, len: 2 })
        );
    }
}
