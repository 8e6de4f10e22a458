//! Posterior computation.

use std::collections::BTreeSet;

use veta_core::config::{FusionConfig, NormalizationMode};
use veta_core::errors::{AnalysisResult, ValidationError};
use veta_core::types::{ConfidenceClass, LikelihoodDistribution, PosteriorDistribution, PriorDistribution};

use super::correlation::apply_independence_correction;
use crate::veto::VetoResult;

#[derive(Debug, Clone, Default)]
pub struct FusionEngine {
    config: FusionConfig,
}

impl FusionEngine {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Fuse a prior with per-evidence likelihoods.
    ///
    /// A failed veto short-circuits to the zero posterior before any input
    /// is inspected, so a vetoed result is exactly zero whatever the
    /// likelihoods hold.
    pub fn compute_posterior(
        &self,
        prior: &PriorDistribution,
        likelihoods: &[LikelihoodDistribution],
        veto: &VetoResult,
    ) -> AnalysisResult<PosteriorDistribution> {
        if !veto.passed {
            let reason = veto.summary().unwrap_or_else(|| "geological veto".to_string());
            return Ok(PosteriorDistribution::vetoed(reason, self.config.credible_level));
        }
        self.validate(prior, likelihoods)?;

        let corrected = apply_independence_correction(&self.config, likelihoods);

        let mut log_mean = prior.mean.ln();
        for l in &corrected {
            log_mean += safe_ln(l.mean);
        }

        // Pairwise propagation v' = v·vᵢ + v + vᵢ across the likelihoods only.
        // It assumes near-unit means and overstates spread far from 1.0.
        // With no evidence the prior's own variance carries through.
        let mut variances = corrected.iter().map(|l| l.variance);
        let variance = match variances.next() {
            Some(first) => variances.fold(first, |v, vi| v * vi + v + vi),
            None => prior.variance,
        };
        let variance = if variance.is_finite() { variance.max(0.0) } else { f64::MAX };

        // Z = prior × Π Lᵢ, kept in log space so huge products stay finite.
        let ln_evidence = match self.config.normalization {
            NormalizationMode::EvidenceProduct => log_mean,
            NormalizationMode::BinaryOdds => ln_add_exp(log_mean, (1.0 - prior.mean).ln()),
        };
        let floor = self.config.normalization_floor;
        let (ln_z, normalization_constant) = if ln_evidence > floor.ln() {
            (ln_evidence, ln_evidence.exp().min(f64::MAX))
        } else {
            (floor.ln(), floor)
        };

        let mean = (log_mean - ln_z).exp().clamp(0.0, 1.0);

        let z = self.config.z_score();
        let half_width = z * variance.sqrt();
        let confidence_interval = (
            (mean - half_width).clamp(0.0, 1.0),
            (mean + half_width).clamp(0.0, 1.0),
        );
        let confidence_class = ConfidenceClass::classify(mean, variance);

        let total_log: f64 = corrected.iter().map(|l| safe_ln(l.mean).abs()).sum();
        let contributions = corrected
            .iter()
            .map(|l| {
                let share = if total_log > 0.0 {
                    safe_ln(l.mean).abs() / total_log * 100.0
                } else {
                    0.0
                };
                (l.evidence_type, share)
            })
            .collect();

        tracing::debug!(
            mean,
            variance,
            class = %confidence_class,
            normalization_constant,
            evidence = corrected.len(),
            "posterior computed"
        );

        Ok(PosteriorDistribution {
            mean,
            variance,
            confidence_class,
            confidence_interval,
            credible_level: self.config.credible_level,
            contributions,
            normalization_constant,
            vetoed: false,
            veto_reason: None,
        })
    }

    fn validate(&self, prior: &PriorDistribution, likelihoods: &[LikelihoodDistribution]) -> Result<(), ValidationError> {
        if !(prior.mean.is_finite() && prior.mean > 0.0 && prior.mean <= 1.0) {
            return Err(ValidationError::invalid(
                "prior.mean",
                format!("{} is not a probability in (0, 1]", prior.mean),
            ));
        }
        if !(prior.variance.is_finite() && prior.variance >= 0.0) {
            return Err(ValidationError::invalid("prior.variance", "must be finite and non-negative"));
        }
        let mut seen = BTreeSet::new();
        for l in likelihoods {
            let field = format!("likelihood.{}", l.evidence_type);
            if !l.mean.is_finite() || l.mean < 0.0 {
                return Err(ValidationError::invalid(&field, format!("mean {} must be finite and non-negative", l.mean)));
            }
            if !l.variance.is_finite() || l.variance < 0.0 {
                return Err(ValidationError::invalid(&field, "variance must be finite and non-negative"));
            }
            if !seen.insert(l.evidence_type) {
                return Err(ValidationError::invalid(&field, "supplied more than once"));
            }
        }
        Ok(())
    }
}

/// `ln` with zero mapped to the smallest positive double.
fn safe_ln(x: f64) -> f64 {
    x.max(f64::MIN_POSITIVE).ln()
}

/// `ln(eᵃ + eᵇ)` without leaving log space. `b` may be `-inf`.
fn ln_add_exp(a: f64, b: f64) -> f64 {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    if lo == f64::NEG_INFINITY {
        return hi;
    }
    hi + (lo - hi).exp().ln_1p()
}
