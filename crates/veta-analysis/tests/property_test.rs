//! Property tests for the fusion and collapse invariants.

use proptest::prelude::*;

use veta_analysis::collapse::CollapseDetector;
use veta_analysis::fusion::{apply_independence_correction, correct_likelihood, FusionEngine};
use veta_analysis::veto::{VetoCategory, VetoResult};
use veta_core::config::{FusionConfig, MaxCorrelationMode, NormalizationMode};
use veta_core::types::{ConfidenceClass, EvidenceType, LikelihoodDistribution, PriorDistribution, PriorFactors};

fn prior(mean: f64, variance: f64) -> PriorDistribution {
    PriorDistribution {
        mean,
        variance,
        confidence_interval: (0.0, 1.0),
        factors: PriorFactors {
            tectonic: mean,
            age: mean,
            stratigraphic: mean,
            analog_density: mean,
        },
        reasoning: vec![],
        data_quality_flags: vec![],
    }
}

fn likelihoods(values: &[(f64, f64)]) -> Vec<LikelihoodDistribution> {
    EvidenceType::all()
        .iter()
        .zip(values)
        .map(|(&ty, &(mean, variance))| LikelihoodDistribution::new(ty, mean, variance))
        .collect()
}

fn vetoed() -> VetoResult {
    VetoResult {
        passed: false,
        probability: 0.0,
        failure_category: Some(VetoCategory::Preservation),
        failure_condition: Some("deep_erosion".to_string()),
        failure_reason: Some("eroded".to_string()),
        ..VetoResult::unchecked()
    }
}

fn any_mode() -> impl Strategy<Value = (MaxCorrelationMode, NormalizationMode)> {
    (
        prop_oneof![
            Just(MaxCorrelationMode::RowMaxMinusDiagonal),
            Just(MaxCorrelationMode::ExcludeDiagonal)
        ],
        prop_oneof![
            Just(NormalizationMode::EvidenceProduct),
            Just(NormalizationMode::BinaryOdds)
        ],
    )
}

proptest! {
    #[test]
    fn posterior_stays_a_probability(
        p in 0.01f64..0.3,
        pv in 0.0f64..0.1,
        values in prop::collection::vec((0.0f64..50.0, 0.0f64..5.0), 0..=4),
        (max_mode, norm) in any_mode(),
    ) {
        let config = FusionConfig {
            max_correlation_mode: max_mode,
            normalization: norm,
            ..FusionConfig::default()
        };
        let post = FusionEngine::new(config)
            .compute_posterior(&prior(p, pv), &likelihoods(&values), &VetoResult::unchecked())
            .unwrap();
        prop_assert!((0.0..=1.0).contains(&post.mean), "mean {}", post.mean);
        prop_assert!(post.confidence_interval.0 >= 0.0);
        prop_assert!(post.confidence_interval.1 <= 1.0);
        prop_assert!(post.confidence_interval.0 <= post.confidence_interval.1);
        prop_assert!(post.variance >= 0.0);
        prop_assert!(post.normalization_constant >= 0.001);
    }

    #[test]
    fn vetoed_posterior_is_zero_for_any_evidence(
        p in 0.0f64..1.0,
        values in prop::collection::vec((-10.0f64..100.0, -1.0f64..5.0), 0..=4),
    ) {
        let post = FusionEngine::default()
            .compute_posterior(&prior(p, 0.01), &likelihoods(&values), &vetoed())
            .unwrap();
        prop_assert!(post.vetoed);
        prop_assert_eq!(post.mean, 0.0);
        prop_assert_eq!(post.variance, 0.0);
        prop_assert_eq!(post.confidence_interval, (0.0, 0.0));
        prop_assert_eq!(post.confidence_class, ConfidenceClass::Noise);
    }

    #[test]
    fn recorrection_below_threshold_is_identity(
        mean in 0.0f64..10.0,
        variance in 0.0f64..2.0,
        first in 0.71f64..1.0,
        second in 0.0f64..=0.7,
    ) {
        let config = FusionConfig::default();
        let input = LikelihoodDistribution::new(EvidenceType::Surface, mean, variance);
        let once = correct_likelihood(&config, &input, first);
        prop_assert!(once.corrected);
        let twice = correct_likelihood(&config, &once, second);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn correction_shrinks_towards_one(
        values in prop::collection::vec((0.01f64..20.0, 0.0f64..2.0), 1..=4),
        r in 0.71f64..1.0,
    ) {
        let config = FusionConfig {
            max_correlation_mode: MaxCorrelationMode::ExcludeDiagonal,
            default_correlation: r,
            correlations: vec![],
            ..FusionConfig::default()
        };
        let input = likelihoods(&values);
        let corrected = apply_independence_correction(&config, &input);
        for (before, after) in input.iter().zip(&corrected) {
            prop_assert!(after.variance <= before.variance);
            prop_assert!((after.mean.ln()).abs() <= (before.mean.ln()).abs() + 1e-12);
        }
    }

    #[test]
    fn collapse_outputs_are_bounded(
        prior_mean in 0.0f64..1.0,
        pairs in prop::collection::vec((0.0f64..10.0, 0.0f64..2.0), 0..8),
    ) {
        let (ls, us): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let r = CollapseDetector::default().detect_collapse(prior_mean, &ls, &us).unwrap();
        prop_assert!((0.0..=1.0).contains(&r.uncertainty_reduction));
        prop_assert!((0.0..=1.0).contains(&r.convergence_score));
        prop_assert!(r.collapse_strength >= 0.0 && r.collapse_strength <= 10.0);
        prop_assert!(r.independence_correlation.abs() <= 1.0);
        prop_assert!(r.supportive_count <= ls.len());
    }
}
