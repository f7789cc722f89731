//! Configuration for explanations and their rendering
//!
//! Every field has a default, so a partial JSON document (or none at all)
//! yields a usable configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QLimeError, Result};

/// Largest register the statevector backend may allocate
pub const MAX_SUPPORTED_QUBITS: usize = 30;

/// Which probability backend executes the encoding circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Gate-by-gate statevector simulation
    Statevector,
    /// Closed-form product distribution
    ProductState,
}

impl Default for BackendKind {
    fn default() -> Self {
        BackendKind::Statevector
    }
}

/// Settings for the explainer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainerConfig {
    /// Perturb every feature, not only the active ones
    pub full_superposition: bool,
    /// Seed for the measurement sampler; entropy when absent
    pub seed: Option<u64>,
    /// Upper bound on the number of features (qubits) per explanation
    pub max_qubits: usize,
    pub backend: BackendKind,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        ExplainerConfig {
            full_superposition: false,
            seed: None,
            max_qubits: 20,
            backend: BackendKind::default(),
        }
    }
}

/// Settings for the chart and text renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    /// Contributions with magnitude at or below this are treated as zero
    pub threshold: f64,
    /// Number of features highlighted in text
    pub top_n: usize,
    pub positive_color: String,
    pub negative_color: String,
    pub highlight_background: String,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        VisualizationConfig {
            threshold: 1e-7,
            top_n: 5,
            positive_color: "blue".to_string(),
            negative_color: "red".to_string(),
            highlight_background: "yellow".to_string(),
        }
    }
}

impl VisualizationConfig {
    /// Color for a contribution of the given sign
    pub fn color_for(&self, value: f64) -> &str {
        if value > 0.0 {
            &self.positive_color
        } else {
            &self.negative_color
        }
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QLimeConfig {
    pub explainer: ExplainerConfig,
    pub visualization: VisualizationConfig,
}

impl QLimeConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: QLimeConfig = serde_json::from_str(json)
            .map_err(|e| QLimeError::Config(format!("invalid JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| QLimeError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| QLimeError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let max_qubits = self.explainer.max_qubits;
        if max_qubits == 0 || max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(QLimeError::Config(format!(
                "max_qubits must be in 1..={}, got {}",
                MAX_SUPPORTED_QUBITS, max_qubits
            )));
        }

        let threshold = self.visualization.threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(QLimeError::Config(format!(
                "threshold must be finite and non-negative, got {}",
                threshold
            )));
        }

        Ok(())
    }
}
