//! Chemical likelihood configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Which diagnostic detections enter the likelihood product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionTerms {
    /// One term per diagnostic detection, across every sample.
    #[default]
    AllDetections,
    /// One term per distinct diagnostic mineral, its most abundant detection.
    /// Repeat sampling of the same mineral then adds no weight.
    StrongestPerMineral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemicalConfig {
    /// Detections at or below this abundance are dropped. Default: 0.05.
    pub detection_threshold: f64,
    /// Floor for each `abundance × confidence` term. Default: 0.1.
    pub term_floor: f64,
    /// Likelihood ceiling. Default: 5.0.
    pub likelihood_cap: f64,
    /// Likelihood when nothing diagnostic was detected. Default: 0.1.
    pub no_detection_likelihood: f64,
    /// Unmixing uncertainty assumed when no sample produced a fit. Default: 0.5.
    pub unfit_unmixing_uncertainty: f64,
    /// Default: every detection.
    pub product_terms: DetectionTerms,
}

impl Default for ChemicalConfig {
    fn default() -> Self {
        Self {
            detection_threshold: constants::DETECTION_ABUNDANCE_THRESHOLD,
            term_floor: constants::DETECTION_TERM_FLOOR,
            likelihood_cap: constants::LIKELIHOOD_CAP,
            no_detection_likelihood: constants::NO_DETECTION_LIKELIHOOD,
            unfit_unmixing_uncertainty: 0.5,
            product_terms: DetectionTerms::default(),
        }
    }
}
