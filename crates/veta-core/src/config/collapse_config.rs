//! Probability collapse detector configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseConfig {
    /// Minimum number of likelihoods > 1.0. Default: 2.
    pub min_supportive: usize,
    /// `1 − geomean(uncertainty)` must exceed this. Default: 0.7.
    pub uncertainty_reduction_threshold: f64,
    /// Convergence score must exceed this for collapse. Default: 0.8.
    pub convergence_threshold: f64,
    /// Convergence needed for a MEDIUM call without full collapse. Default: 0.6.
    pub medium_convergence_threshold: f64,
    /// Largest |Pearson r| still treated as independent. Default: 0.8.
    pub independence_limit: f64,
    /// Collapse strength ceiling. Default: 10.0.
    pub strength_cap: f64,
    /// Strength above which a collapse is COLLAPSED. Default: 5.0.
    pub collapsed_strength: f64,
    /// Strength above which a collapse is HIGH. Default: 2.0.
    pub high_strength: f64,
    /// Convergence below which a pattern is DIVERGENT. Default: 0.4.
    pub divergent_threshold: f64,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            min_supportive: 2,
            uncertainty_reduction_threshold: 0.7,
            convergence_threshold: 0.8,
            medium_convergence_threshold: 0.6,
            independence_limit: 0.8,
            strength_cap: constants::COLLAPSE_STRENGTH_CAP,
            collapsed_strength: 5.0,
            high_strength: 2.0,
            divergent_threshold: 0.4,
        }
    }
}
