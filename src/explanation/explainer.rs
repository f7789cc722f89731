//! Per-feature attributions from quantum perturbations
//!
//! For every selected feature the explainer flips that feature's qubit,
//! measures the register once and scores the measured vector. The feature's
//! contribution is the original prediction minus the perturbed one.
//!
//! With a random sampler the measurement is stochastic, so explaining the
//! same input twice can give different contributions. Use a seeded
//! [`RngSampler`] or a deterministic sampler when reproducibility matters.

use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::ExplainerConfig;
use crate::error::{ensure_same_len, Result};
use crate::machine_learning::classifier::LogisticClassifier;
use crate::machine_learning::core::PredictiveModel;
use crate::simulators::{backend_for, ProbabilityBackend};

use super::encoding::validate_features;
use super::measurement::{measure_and_map_to_classical, OutcomeSampler, RngSampler};

/// Contribution of every feature to one prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    contributions: Vec<f64>,
    original_prediction: f64,
    perturbed: Vec<usize>,
}

impl Explanation {
    /// `contributions[i]` is zero for every feature that was not perturbed
    pub fn contributions(&self) -> &[f64] {
        &self.contributions
    }

    pub fn original_prediction(&self) -> f64 {
        self.original_prediction
    }

    /// Indices of the features that were flipped, ascending
    pub fn perturbed_indices(&self) -> &[usize] {
        &self.perturbed
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.contributions
    }
}

/// Explains predictions with a fixed backend and sampler
pub struct Explainer<S: OutcomeSampler> {
    backend: Box<dyn ProbabilityBackend>,
    sampler: S,
    config: ExplainerConfig,
}

impl Explainer<RngSampler<StdRng>> {
    /// Backend and sampler chosen by the configuration
    ///
    /// The sampler is seeded from `config.seed` when present, otherwise
    /// from system entropy.
    pub fn from_config(config: ExplainerConfig) -> Self {
        let sampler = match config.seed {
            Some(seed) => RngSampler::seeded(seed),
            None => RngSampler::from_entropy(),
        };
        Explainer::new(backend_for(&config), sampler, config)
    }
}

impl<S: OutcomeSampler> Explainer<S> {
    pub fn new(backend: Box<dyn ProbabilityBackend>, sampler: S, config: ExplainerConfig) -> Self {
        Explainer { backend, sampler, config }
    }

    pub fn config(&self) -> &ExplainerConfig {
        &self.config
    }

    pub fn backend(&self) -> &dyn ProbabilityBackend {
        self.backend.as_ref()
    }

    /// Explain a logistic classifier with the given weights
    pub fn explain(&mut self, vector: &[f64], weights: &[f64]) -> Result<Explanation> {
        validate_features(vector)?;
        ensure_same_len(vector.len(), weights.len(), "explainer weights")?;

        let model = LogisticClassifier::new(weights.to_vec())?;
        self.explain_with_model(vector, &model)
    }

    /// Explain any model that scores feature vectors
    pub fn explain_with_model<M>(&mut self, vector: &[f64], model: &M) -> Result<Explanation>
    where
        M: PredictiveModel<Input = [f64], Output = f64> + ?Sized,
    {
        validate_features(vector)?;
        ensure_same_len(vector.len(), model.dimensions().0, "explainer model input")?;

        let original_prediction = model.predict(vector)?;
        let full_superposition = self.config.full_superposition;
        debug!(
            features = vector.len(),
            full_superposition,
            backend = self.backend.name(),
            original_prediction,
            "explaining prediction"
        );

        let mut contributions = vec![0.0; vector.len()];
        let mut perturbed = Vec::new();

        for (i, &value) in vector.iter().enumerate() {
            if value != 1.0 && !full_superposition {
                continue;
            }

            let measured = measure_and_map_to_classical(
                self.backend.as_ref(),
                &mut self.sampler,
                vector,
                Some(i),
            )?;
            let measured: Vec<f64> = measured.into_iter().map(f64::from).collect();
            let new_prediction = model.predict(measured.as_slice())?;

            contributions[i] = original_prediction - new_prediction;
            perturbed.push(i);
            trace!(feature = i, new_prediction, contribution = contributions[i], "feature perturbed");
        }

        Ok(Explanation {
            contributions,
            original_prediction,
            perturbed,
        })
    }
}

/// Contribution vector for one input, using the statevector backend and an
/// entropy-seeded sampler
///
/// Repeated calls with the same arguments may return different vectors.
pub fn explain(vector: &[f64], weights: &[f64], full_superposition: bool) -> Result<Vec<f64>> {
    let config = ExplainerConfig {
        full_superposition,
        ..ExplainerConfig::default()
    };
    Explainer::from_config(config)
        .explain(vector, weights)
        .map(Explanation::into_vec)
}

/// Explain many inputs in parallel
///
/// Each row gets its own backend and sampler. With `config.seed` set, row
/// `i` is sampled with seed `seed + i`, so results do not depend on how the
/// rows are scheduled.
pub fn explain_batch(
    rows: &[Vec<f64>],
    weights: &[f64],
    config: &ExplainerConfig,
) -> Result<Vec<Explanation>> {
    debug!(rows = rows.len(), "explaining batch");

    rows.par_iter()
        .enumerate()
        .map(|(i, row)| {
            let row_config = ExplainerConfig {
                seed: config.seed.map(|seed| seed.wrapping_add(i as u64)),
                ..config.clone()
            };
            Explainer::from_config(row_config).explain(row, weights)
        })
        .collect()
}
