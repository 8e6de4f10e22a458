//! Collapse detector.

use veta_core::config::CollapseConfig;
use veta_core::constants::{PRIOR_DIVISOR_FLOOR, UNCERTAINTY_WEIGHT_EPSILON};
use veta_core::errors::{AnalysisResult, ValidationError};

use super::stats;
use super::types::{CollapseConfidence, CollapseResult, EvidencePattern, PatternAssessment};

#[derive(Debug, Clone, Default)]
pub struct CollapseDetector {
    config: CollapseConfig,
}

impl CollapseDetector {
    pub fn new(config: CollapseConfig) -> Self {
        Self { config }
    }

    /// Test the four collapse criteria over parallel likelihood and
    /// uncertainty vectors.
    ///
    /// (a) at least two supportive likelihoods, (b) uncertainty reduction
    /// above threshold, (c) convergent log-odds, (d) sorted likelihoods and
    /// uncertainties not strongly correlated. (d) is a heuristic proxy for
    /// independence, not a test of it.
    pub fn detect_collapse(
        &self,
        prior_mean: f64,
        likelihoods: &[f64],
        uncertainties: &[f64],
    ) -> AnalysisResult<CollapseResult> {
        validate(prior_mean, likelihoods, uncertainties)?;
        let cfg = &self.config;

        let supportive: Vec<(f64, f64)> = likelihoods
            .iter()
            .zip(uncertainties)
            .filter(|(l, _)| **l > 1.0)
            .map(|(&l, &u)| (l, u))
            .collect();
        let supportive_count = supportive.len();
        let has_support = supportive_count >= cfg.min_supportive;

        let uncertainty_reduction = if uncertainties.is_empty() {
            0.0
        } else {
            (1.0 - stats::geometric_mean(uncertainties)).clamp(0.0, 1.0)
        };
        let reduces = uncertainty_reduction > cfg.uncertainty_reduction_threshold;

        let convergence_score = stats::convergence_score(likelihoods);
        let converges = convergence_score > cfg.convergence_threshold;

        let mut sorted_l = likelihoods.to_vec();
        let mut sorted_u = uncertainties.to_vec();
        sorted_l.sort_by(f64::total_cmp);
        sorted_u.sort_by(f64::total_cmp);
        let independence_correlation = stats::pearson(&sorted_l, &sorted_u);
        let independence_valid = independence_correlation.abs() < cfg.independence_limit;

        let collapsed = has_support && reduces && converges && independence_valid;

        let (values, weights): (Vec<f64>, Vec<f64>) = supportive
            .iter()
            .map(|&(l, u)| (l, 1.0 / (u + UNCERTAINTY_WEIGHT_EPSILON)))
            .unzip();
        let collapse_strength = (stats::weighted_geometric_mean(&values, &weights)
            / prior_mean.max(PRIOR_DIVISOR_FLOOR))
        .min(cfg.strength_cap);

        let confidence_level = if collapsed && collapse_strength > cfg.collapsed_strength {
            CollapseConfidence::Collapsed
        } else if collapsed && collapse_strength > cfg.high_strength {
            CollapseConfidence::High
        } else if has_support && reduces && convergence_score > cfg.medium_convergence_threshold {
            CollapseConfidence::Medium
        } else {
            CollapseConfidence::Low
        };

        tracing::debug!(
            supportive_count,
            uncertainty_reduction,
            convergence_score,
            collapse_strength,
            independence_correlation,
            level = %confidence_level,
            "collapse evaluated"
        );

        Ok(CollapseResult {
            collapsed,
            supportive_count,
            uncertainty_reduction,
            convergence_score,
            collapse_strength,
            independence_valid,
            independence_correlation,
            confidence_level,
        })
    }

    /// Classify how well the evidence lines agree, for operator guidance.
    pub fn classify_evidence_pattern(&self, likelihoods: &[f64]) -> PatternAssessment {
        let convergence_score = stats::convergence_score(likelihoods);
        let pattern = if likelihoods.len() < 2 {
            EvidencePattern::InsufficientData
        } else if convergence_score > self.config.convergence_threshold {
            EvidencePattern::Convergent
        } else if convergence_score < self.config.divergent_threshold {
            EvidencePattern::Divergent
        } else {
            EvidencePattern::Mixed
        };
        PatternAssessment {
            pattern,
            convergence_score,
            guidance: pattern.guidance().to_string(),
        }
    }
}

fn validate(prior_mean: f64, likelihoods: &[f64], uncertainties: &[f64]) -> Result<(), ValidationError> {
    if likelihoods.len() != uncertainties.len() {
        return Err(ValidationError::LengthMismatch {
            left: "likelihoods".to_string(),
            left_len: likelihoods.len(),
            right: "uncertainties".to_string(),
            right_len: uncertainties.len(),
        });
    }
    if !prior_mean.is_finite() || prior_mean < 0.0 {
        return Err(ValidationError::invalid("prior_mean", "must be finite and non-negative"));
    }
    if likelihoods.iter().any(|l| !l.is_finite() || *l < 0.0) {
        return Err(ValidationError::invalid("likelihoods", "must be finite and non-negative"));
    }
    if uncertainties.iter().any(|u| !u.is_finite() || *u < 0.0) {
        return Err(ValidationError::invalid("uncertainties", "must be finite and non-negative"));
    }
    Ok(())
}
