//! Classical models whose predictions are explained

pub mod core;
pub mod classifier;

/// Re-exports of commonly used components
pub mod prelude {
    pub use super::core::{Model, PredictiveModel};
    pub use super::classifier::{classical_classifier, sigmoid, LogisticClassifier};
}
