//! Bayesian fusion: prior × independence-corrected likelihoods, gated by
//! the geological veto.

pub mod correlation;
pub mod engine;

pub use correlation::{apply_independence_correction, correct_likelihood, max_correlation};
pub use engine::FusionEngine;
