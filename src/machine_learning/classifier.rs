//! Logistic classifier over feature vectors

use crate::error::{ensure_same_len, QLimeError, Result};
use crate::machine_learning::core::{Model, PredictiveModel};

/// Logistic function `1 / (1 + e^-x)`
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Dot product of features and weights
pub fn linear_score(features: &[f64], weights: &[f64]) -> Result<f64> {
    if features.is_empty() {
        return Err(QLimeError::EmptyInput);
    }
    ensure_same_len(weights.len(), features.len(), "classifier features")?;

    Ok(features.iter().zip(weights).map(|(f, w)| f * w).sum())
}

/// `sigmoid(features · weights)`
///
/// Pure: identical inputs always give bit-identical outputs.
pub fn classical_classifier(features: &[f64], weights: &[f64]) -> Result<f64> {
    linear_score(features, weights).map(sigmoid)
}

/// A logistic regression model with fixed weights
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticClassifier {
    weights: Vec<f64>,
}

impl LogisticClassifier {
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        if weights.is_empty() {
            return Err(QLimeError::EmptyInput);
        }
        Ok(LogisticClassifier { weights })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Raw linear score before the sigmoid
    pub fn score(&self, features: &[f64]) -> Result<f64> {
        linear_score(features, &self.weights)
    }
}

impl Model for LogisticClassifier {
    type Input = [f64];
    type Output = f64;

    fn dimensions(&self) -> (usize, usize) {
        (self.weights.len(), 1)
    }
}

impl PredictiveModel for LogisticClassifier {
    fn predict(&self, input: &[f64]) -> Result<f64> {
        classical_classifier(input, &self.weights)
    }
}
