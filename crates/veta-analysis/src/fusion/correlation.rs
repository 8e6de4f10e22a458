//! Independence correction for correlated evidence.
//!
//! Correlated lines of evidence would be double-counted if multiplied
//! naively. When a type's max correlation exceeds the threshold its mean is
//! shrunk towards 1.0: `mean^(1/(1+r))`, `variance × 1/(1+r)`.

use veta_core::config::{FusionConfig, MaxCorrelationMode};
use veta_core::types::{EvidenceType, IndependenceCorrection, LikelihoodDistribution};

/// Max correlation of `ty` against the supplied evidence types.
pub fn max_correlation(config: &FusionConfig, ty: EvidenceType, present: &[EvidenceType]) -> f64 {
    match config.max_correlation_mode {
        MaxCorrelationMode::RowMaxMinusDiagonal => {
            let row_max = present
                .iter()
                .map(|&other| config.correlation(ty, other).abs())
                .fold(config.correlation(ty, ty).abs(), f64::max);
            row_max - 1.0
        }
        MaxCorrelationMode::ExcludeDiagonal => present
            .iter()
            .filter(|&&other| other != ty)
            .map(|&other| config.correlation(ty, other).abs())
            .fold(0.0, f64::max),
    }
}

/// Correct one likelihood given its max correlation. Below or at the
/// threshold the input is returned unchanged.
pub fn correct_likelihood(
    config: &FusionConfig,
    likelihood: &LikelihoodDistribution,
    max_corr: f64,
) -> LikelihoodDistribution {
    if max_corr <= config.correction_threshold {
        return likelihood.clone();
    }
    let penalty_factor = 1.0 / (1.0 + max_corr);
    likelihood.with_correction(
        likelihood.mean.powf(penalty_factor),
        likelihood.variance * penalty_factor,
        IndependenceCorrection {
            penalty_factor,
            max_correlation: max_corr,
        },
    )
}

/// Apply the correction to every likelihood against the supplied set.
pub fn apply_independence_correction(
    config: &FusionConfig,
    likelihoods: &[LikelihoodDistribution],
) -> Vec<LikelihoodDistribution> {
    let present: Vec<EvidenceType> = likelihoods.iter().map(|l| l.evidence_type).collect();
    likelihoods
        .iter()
        .map(|l| {
            let max_corr = max_correlation(config, l.evidence_type, &present);
            let corrected = correct_likelihood(config, l, max_corr);
            if corrected.corrected && !l.corrected {
                tracing::debug!(
                    evidence_type = %l.evidence_type,
                    max_corr,
                    before = l.mean,
                    after = corrected.mean,
                    "independence correction applied"
                );
            }
            corrected
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use EvidenceType::*;

    #[test]
    fn row_max_minus_diagonal_never_corrects() {
        let cfg = FusionConfig::default();
        let r = max_correlation(&cfg, Chemical, &[Chemical, Surface]);
        assert_eq!(r, 0.0);
    }

    #[test]
    fn exclude_diagonal_uses_strongest_partner() {
        let cfg = FusionConfig {
            max_correlation_mode: MaxCorrelationMode::ExcludeDiagonal,
            ..FusionConfig::default()
        };
        assert_eq!(max_correlation(&cfg, Chemical, &[Chemical, Structural, Physical]), 0.5);
        assert_eq!(max_correlation(&cfg, Chemical, &[Chemical]), 0.0);
    }

    #[test]
    fn correction_shrinks_towards_one() {
        let cfg = FusionConfig::default();
        let l = LikelihoodDistribution::new(Chemical, 4.0, 0.4);
        let c = correct_likelihood(&cfg, &l, 1.0);
        assert!(c.corrected);
        assert!((c.mean - 2.0).abs() < 1e-12);
        assert!((c.variance - 0.2).abs() < 1e-12);
        assert_eq!(c.correction.map(|x| x.penalty_factor), Some(0.5));
    }

    #[test]
    fn at_threshold_is_untouched() {
        let cfg = FusionConfig::default();
        let l = LikelihoodDistribution::new(Surface, 3.0, 0.1);
        assert_eq!(correct_likelihood(&cfg, &l, 0.7), l);
    }
}
