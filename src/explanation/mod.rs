//! Quantum LIME explanations
//!
//! Features are angle-encoded on one qubit each, perturbed by flipping one
//! qubit at a time, measured, and the prediction change is attributed to
//! the flipped feature.

pub mod encoding;
pub mod measurement;
pub mod explainer;

pub use encoding::{encode_and_flip, rotation_angles, validate_features};
pub use measurement::{
    decode_basis_state,
    measure_and_map_to_classical,
    FixedOutcomeSampler,
    MostProbableSampler,
    OutcomeSampler,
    RngSampler,
};
pub use explainer::{explain, explain_batch, Explainer, Explanation};
