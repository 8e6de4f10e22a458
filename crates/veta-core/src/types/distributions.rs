//! Prior, likelihood, and posterior distributions.
//!
//! All three are summarized by a mean, a variance, and a normal-approximation
//! interval. A likelihood is a multiplicative factor, not a probability, and
//! may exceed 1.0.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::commodity::EvidenceType;
use crate::constants::LIKELIHOOD_CAP;

/// The four regional compatibility factors behind a prior, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorFactors {
    pub tectonic: f64,
    pub age: f64,
    pub stratigraphic: f64,
    pub analog_density: f64,
}

impl PriorFactors {
    pub fn as_array(&self) -> [f64; 4] {
        [self.tectonic, self.age, self.stratigraphic, self.analog_density]
    }
}

/// Regional prior probability of deposit existence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorDistribution {
    /// Prior mean, clamped to [floor, ceiling].
    pub mean: f64,
    pub variance: f64,
    /// 95% interval (low, high), clamped to [0.0, 1.0].
    pub confidence_interval: (f64, f64),
    pub factors: PriorFactors,
    /// Human-readable audit trail of how each factor was scored.
    pub reasoning: Vec<String>,
    /// Data-quality problems found in the inputs (e.g. `age_fallback`).
    pub data_quality_flags: Vec<String>,
}

/// Metadata recorded when the independence correction touched a likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndependenceCorrection {
    /// Exponent and variance multiplier applied: `1 / (1 + max_correlation)`.
    pub penalty_factor: f64,
    pub max_correlation: f64,
}

/// Per-evidence-type likelihood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikelihoodDistribution {
    pub evidence_type: EvidenceType,
    /// Multiplicative support factor; > 1.0 is supportive.
    pub mean: f64,
    pub variance: f64,
    pub confidence_interval: (f64, f64),
    pub correction: Option<IndependenceCorrection>,
    pub corrected: bool,
}

impl LikelihoodDistribution {
    /// Build a likelihood with a 95% normal interval clamped to [0, cap].
    pub fn new(evidence_type: EvidenceType, mean: f64, variance: f64) -> Self {
        let variance = variance.max(0.0);
        Self {
            evidence_type,
            mean,
            variance,
            confidence_interval: likelihood_interval(mean, variance),
            correction: None,
            corrected: false,
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.max(0.0).sqrt()
    }

    pub fn is_supportive(&self) -> bool {
        self.mean > 1.0
    }

    /// Return a copy with a new mean and variance, keeping the type and
    /// recording the correction that produced it.
    pub fn with_correction(&self, mean: f64, variance: f64, correction: IndependenceCorrection) -> Self {
        let mut corrected = Self::new(self.evidence_type, mean, variance);
        corrected.correction = Some(correction);
        corrected.corrected = true;
        corrected
    }
}

fn likelihood_interval(mean: f64, variance: f64) -> (f64, f64) {
    let half_width = 1.96 * variance.sqrt();
    let low = (mean - half_width).clamp(0.0, LIKELIHOOD_CAP);
    let high = (mean + half_width).clamp(0.0, LIKELIHOOD_CAP);
    (low, high)
}

/// Ordinal certainty bucket for a posterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceClass {
    Noise,
    Recon,
    Prospect,
    Priority,
    DrillJustified,
}

impl ConfidenceClass {
    /// Classify by posterior mean and signal-to-noise ratio.
    ///
    /// Each rung fails if *either* the mean or the SNR is below its bar.
    pub fn classify(mean: f64, variance: f64) -> Self {
        let snr = signal_to_noise(mean, variance);
        if mean < 0.05 || snr < 1.0 {
            Self::Noise
        } else if mean < 0.15 || snr < 2.0 {
            Self::Recon
        } else if mean < 0.35 || snr < 3.0 {
            Self::Prospect
        } else if mean < 0.65 || snr < 4.0 {
            Self::Priority
        } else {
            Self::DrillJustified
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Noise => "NOISE",
            Self::Recon => "RECON",
            Self::Prospect => "PROSPECT",
            Self::Priority => "PRIORITY",
            Self::DrillJustified => "DRILL_JUSTIFIED",
        }
    }
}

impl fmt::Display for ConfidenceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `mean / sqrt(variance)`. Zero variance with a positive mean is an
/// infinitely sharp signal; zero over zero is no signal.
pub fn signal_to_noise(mean: f64, variance: f64) -> f64 {
    if variance <= 0.0 {
        return if mean > 0.0 { f64::INFINITY } else { 0.0 };
    }
    let snr = mean / variance.sqrt();
    if snr.is_finite() {
        snr
    } else {
        0.0
    }
}

/// Posterior probability of deposit existence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosteriorDistribution {
    /// Posterior mean in [0.0, 1.0]; exactly 0.0 when vetoed.
    pub mean: f64,
    pub variance: f64,
    pub confidence_class: ConfidenceClass,
    /// Credible interval (low, high), clamped to [0.0, 1.0].
    pub confidence_interval: (f64, f64),
    pub credible_level: f64,
    /// Share of the total log-evidence each evidence type contributed (percent).
    pub contributions: BTreeMap<EvidenceType, f64>,
    pub normalization_constant: f64,
    pub vetoed: bool,
    pub veto_reason: Option<String>,
}

impl PosteriorDistribution {
    /// The hard zero returned whenever the geological veto fails.
    pub fn vetoed(reason: impl Into<String>, credible_level: f64) -> Self {
        Self {
            mean: 0.0,
            variance: 0.0,
            confidence_class: ConfidenceClass::Noise,
            confidence_interval: (0.0, 0.0),
            credible_level,
            contributions: BTreeMap::new(),
            normalization_constant: 0.0,
            vetoed: true,
            veto_reason: Some(reason.into()),
        }
    }
}
