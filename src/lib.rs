//! Quantum LIME explanations
//!
//! This crate explains the predictions of a logistic classifier over binary
//! feature vectors. Features are angle-encoded on one qubit each, a feature
//! is "turned off" by dropping its rotation, the register is measured, and
//! the change in prediction is attributed to that feature. Results can be
//! described as a bar chart or rendered as highlighted HTML text.

pub mod error;
pub mod config;
pub mod quantum;
pub mod simulators;
pub mod machine_learning;
pub mod explanation;
pub mod visualization;

pub use error::{QLimeError, Result};
pub use config::{BackendKind, ExplainerConfig, QLimeConfig, VisualizationConfig};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{BackendKind, ExplainerConfig, QLimeConfig, VisualizationConfig};
    pub use crate::error::{QLimeError, Result};
    pub use crate::explanation::{
        explain, explain_batch, Explainer, Explanation,
        FixedOutcomeSampler, MostProbableSampler, OutcomeSampler, RngSampler,
    };
    pub use crate::machine_learning::prelude::*;
    pub use crate::simulators::{ProbabilityBackend, ProductStateCalculator, StatevectorBackend};
    pub use crate::visualization::{
        build_bar_chart, highlight_text_with_contributions, FeatureNames, Vocabulary,
    };
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
