//! Core traits for machine learning models

use crate::error::Result;

/// Base trait for all machine learning models
pub trait Model {
    /// Type of input data
    type Input: ?Sized;

    /// Type of output predictions
    type Output;

    /// Returns the input and output dimensions
    fn dimensions(&self) -> (usize, usize);
}

/// Trait for models that can make predictions
pub trait PredictiveModel: Model {
    /// Make a prediction for a single input
    fn predict(&self, input: &Self::Input) -> Result<Self::Output>;
}
