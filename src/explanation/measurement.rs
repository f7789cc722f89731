//! Measurement of the encoded register and mapping back to features
//!
//! Measuring draws one basis state from the exact distribution. The draw is
//! delegated to an [`OutcomeSampler`] so callers decide between genuine
//! randomness, a seeded generator, or a fixed outcome.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::error::{QLimeError, Result};
use crate::simulators::ProbabilityBackend;

use super::encoding::encode_and_flip;

/// Strategy for drawing a basis-state index from a probability distribution
pub trait OutcomeSampler {
    fn sample(&mut self, probabilities: &[f64]) -> Result<usize>;
}

impl<S: OutcomeSampler + ?Sized> OutcomeSampler for &mut S {
    fn sample(&mut self, probabilities: &[f64]) -> Result<usize> {
        (**self).sample(probabilities)
    }
}

/// Samples proportionally to the distribution using a random generator
#[derive(Debug, Clone)]
pub struct RngSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        RngSampler { rng }
    }
}

impl RngSampler<StdRng> {
    /// Reproducible sampler: the same seed yields the same outcome sequence
    pub fn seeded(seed: u64) -> Self {
        RngSampler::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngSampler::new(StdRng::from_entropy())
    }
}

impl<R: Rng> OutcomeSampler for RngSampler<R> {
    fn sample(&mut self, probabilities: &[f64]) -> Result<usize> {
        check_distribution(probabilities)?;
        let dist = WeightedIndex::new(probabilities)
            .map_err(|e| QLimeError::InvalidDistribution(e.to_string()))?;
        Ok(dist.sample(&mut self.rng))
    }
}

/// Always reports the same basis state, whatever its probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOutcomeSampler(pub usize);

impl OutcomeSampler for FixedOutcomeSampler {
    fn sample(&mut self, probabilities: &[f64]) -> Result<usize> {
        if self.0 >= probabilities.len() {
            return Err(QLimeError::IndexOutOfRange { index: self.0, len: probabilities.len() });
        }
        Ok(self.0)
    }
}

/// Picks the most probable basis state, the lowest index on ties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MostProbableSampler;

impl OutcomeSampler for MostProbableSampler {
    fn sample(&mut self, probabilities: &[f64]) -> Result<usize> {
        check_distribution(probabilities)?;

        let mut best = 0;
        for (i, &p) in probabilities.iter().enumerate().skip(1) {
            if p > probabilities[best] {
                best = i;
            }
        }
        Ok(best)
    }
}

fn check_distribution(probabilities: &[f64]) -> Result<()> {
    if probabilities.is_empty() {
        return Err(QLimeError::InvalidDistribution("distribution is empty".to_string()));
    }
    if let Some(p) = probabilities.iter().find(|p| !p.is_finite() || **p < 0.0) {
        return Err(QLimeError::InvalidDistribution(format!("invalid probability {}", p)));
    }
    if probabilities.iter().sum::<f64>() <= 0.0 {
        return Err(QLimeError::InvalidDistribution("total probability is zero".to_string()));
    }
    Ok(())
}

/// Bits of basis state `index` in a register of `width` qubits, qubit 0 first
///
/// Qubit 0 is the most significant bit, so this is the zero-padded binary
/// string of `index` read left to right.
pub fn decode_basis_state(index: usize, width: usize) -> Result<Vec<u8>> {
    if width < usize::BITS as usize && index >> width != 0 {
        return Err(QLimeError::IndexOutOfRange { index, len: 1usize << width });
    }

    Ok((0..width)
        .map(|q| ((index >> (width - 1 - q)) & 1) as u8)
        .collect())
}

/// Encode, measure once, and return the measured bits as a new feature vector
///
/// The result is random unless `sampler` is deterministic: two calls with
/// the same features may return different vectors.
pub fn measure_and_map_to_classical<S: OutcomeSampler + ?Sized>(
    backend: &dyn ProbabilityBackend,
    sampler: &mut S,
    features: &[f64],
    flip_index: Option<usize>,
) -> Result<Vec<u8>> {
    let probabilities = encode_and_flip(backend, features, flip_index)?;
    let measured = sampler.sample(&probabilities)?;
    trace!(?flip_index, measured, "sampled basis state");
    decode_basis_state(measured, features.len())
}
