//! Likelihood service tests: chemical scoring, rule tables, the parallel suite.

mod common;

use std::sync::Arc;

use veta_analysis::likelihood::chemical::{AlterationAssemblage, MineralDetection, SpectralUnmixer, UnmixingResult};
use veta_analysis::likelihood::{ChemicalLikelihood, EvidenceLikelihood, LikelihoodSuite, RuleLikelihood};
use veta_core::config::{ChemicalConfig, DetectionTerms, ProfileSet, VetaConfig};
use veta_core::errors::AnalysisError;
use veta_core::types::{ChemicalEvidence, Commodity, EvidenceType, FieldObservation, GeologicalTarget, SpectralSample};

/// Returns the same detections for every sample.
struct FixedUnmixer {
    detections: Vec<MineralDetection>,
    uncertainty: f64,
}

impl SpectralUnmixer for FixedUnmixer {
    fn unmix(&self, _sample: &SpectralSample) -> UnmixingResult {
        UnmixingResult {
            detections: self.detections.clone(),
            uncertainty: self.uncertainty,
            fitted: true,
        }
    }
}

fn detection(mineral: &str, abundance: f64, confidence: f64) -> MineralDetection {
    MineralDetection {
        mineral: mineral.to_string(),
        abundance,
        confidence,
    }
}

fn chemical_with(detections: Vec<MineralDetection>) -> ChemicalLikelihood {
    ChemicalLikelihood::new(ChemicalConfig::default(), ProfileSet::builtin()).with_unmixer(Arc::new(FixedUnmixer {
        detections,
        uncertainty: 0.2,
    }))
}

fn copper_with_one_sample(data_quality: f64) -> GeologicalTarget {
    let mut t = GeologicalTarget::new("cu", Commodity::CopperPorphyry);
    t.evidence.chemical = ChemicalEvidence {
        samples: vec![common::sample("s1", &[(2200.0, 0.5)])],
        data_quality,
    };
    t
}

#[test]
fn chemical_product_of_diagnostic_terms() {
    let service = chemical_with(vec![
        detection("sericite", 0.8, 0.9),
        detection("kaolinite", 0.5, 0.8),
        // Not diagnostic for copper.
        detection("gypsum", 0.9, 1.0),
        // Below the abundance threshold.
        detection("alunite", 0.04, 1.0),
    ]);
    let a = service.assess(&copper_with_one_sample(0.8)).unwrap();

    assert_eq!(a.detections.len(), 2);
    let coverage = 2.0 / 7.0;
    assert!((a.coverage - coverage).abs() < 1e-12);
    let expected = 0.8 * 0.9 * 0.5 * 0.8 * (1.0 + coverage);
    assert!((a.likelihood.mean - expected).abs() < 1e-12, "mean {}", a.likelihood.mean);
    assert_eq!(a.likelihood.evidence_type, EvidenceType::Chemical);
}

#[test]
fn chemical_uncertainty_is_root_sum_square() {
    let service = chemical_with(vec![detection("sericite", 0.8, 0.9), detection("kaolinite", 0.5, 0.8)]);
    let a = service.assess(&copper_with_one_sample(0.8)).unwrap();

    assert!((a.uncertainty.mineral - 0.15).abs() < 1e-12);
    assert!((a.uncertainty.unmixing - 0.2).abs() < 1e-12);
    assert!((a.uncertainty.data_quality - 0.2).abs() < 1e-12);
    let sigma = (0.15f64.powi(2) + 0.2f64.powi(2) + 0.2f64.powi(2)).sqrt();
    assert!((a.uncertainty.combined - sigma).abs() < 1e-12);
    assert!((a.likelihood.variance - sigma * sigma).abs() < 1e-12);
}

#[test]
fn weak_terms_are_floored() {
    let service = chemical_with(vec![detection("sericite", 0.06, 0.5)]);
    let a = service.assess(&copper_with_one_sample(1.0)).unwrap();
    // 0.03 is floored to 0.1
    let expected = 0.1 * (1.0 + 1.0 / 7.0);
    assert!((a.likelihood.mean - expected).abs() < 1e-12);
}

#[test]
fn every_sample_contributes_a_term() {
    let service = chemical_with(vec![detection("sericite", 0.8, 0.9)]);
    let mut t = copper_with_one_sample(1.0);
    let one = service.assess(&t).unwrap();

    t.evidence.chemical.samples.push(common::sample("s2", &[(2200.0, 0.5)]));
    let two = service.assess(&t).unwrap();

    assert_eq!(two.detections.len(), 2);
    // Coverage counts distinct minerals, so only the product changes.
    assert_eq!(two.coverage, one.coverage);
    let factor = 1.0 + 1.0 / 7.0;
    assert!((one.likelihood.mean - 0.72 * factor).abs() < 1e-12);
    assert!((two.likelihood.mean - 0.72 * 0.72 * factor).abs() < 1e-12);
}

#[test]
fn strongest_per_mineral_terms_are_opt_in() {
    let mut t = copper_with_one_sample(1.0);
    t.evidence.chemical.samples = vec![
        common::sample("weak", &[(1408.0, 0.3), (2200.0, 0.3), (2350.0, 0.3)]),
        common::sample("strong", &[(1408.0, 0.8), (2200.0, 0.8), (2350.0, 0.8)]),
    ];
    let config = ChemicalConfig {
        product_terms: DetectionTerms::StrongestPerMineral,
        ..ChemicalConfig::default()
    };
    let a = ChemicalLikelihood::new(config, ProfileSet::builtin()).assess(&t).unwrap();
    let sericite: Vec<_> = a.detections.iter().filter(|d| d.mineral == "sericite").collect();
    assert_eq!(sericite.len(), 1);
    assert!((sericite[0].abundance - 0.8).abs() < 1e-12);
    assert_eq!(sericite[0].confidence, 1.0);

    let all = ChemicalLikelihood::new(ChemicalConfig::default(), ProfileSet::builtin())
        .assess(&t)
        .unwrap();
    assert_eq!(all.detections.iter().filter(|d| d.mineral == "sericite").count(), 2);
    assert_eq!(all.coverage, a.coverage);
}

#[test]
fn no_diagnostic_detection_is_contrary_evidence() {
    let service = chemical_with(vec![detection("gypsum", 0.9, 1.0)]);
    let a = service.assess(&copper_with_one_sample(1.0)).unwrap();
    assert_eq!(a.likelihood.mean, 0.1);
    assert_eq!(a.uncertainty.mineral, 1.0);
    assert!(!a.likelihood.is_supportive());
}

#[test]
fn no_samples_scores_like_no_detection() {
    let t = GeologicalTarget::new("empty", Commodity::LithiumBrine);
    let a = ChemicalLikelihood::new(ChemicalConfig::default(), ProfileSet::builtin())
        .assess(&t)
        .unwrap();
    assert_eq!(a.likelihood.mean, 0.1);
    assert!(a.detections.is_empty());
    // Nothing was fitted, so the unmixing component takes its default.
    assert_eq!(a.uncertainty.unmixing, ChemicalConfig::default().unfit_unmixing_uncertainty);
}

#[test]
fn configured_cap_bounds_the_likelihood() {
    let config = ChemicalConfig {
        likelihood_cap: 0.2,
        ..ChemicalConfig::default()
    };
    let service = ChemicalLikelihood::new(config, ProfileSet::builtin()).with_unmixer(Arc::new(FixedUnmixer {
        detections: vec![detection("sericite", 1.0, 1.0), detection("chlorite", 1.0, 1.0)],
        uncertainty: 0.0,
    }));
    let a = service.assess(&copper_with_one_sample(1.0)).unwrap();
    assert_eq!(a.likelihood.mean, 0.2);
}

#[test]
fn phyllic_assemblage_is_identified_from_library_bands() {
    let a = ChemicalLikelihood::new(ChemicalConfig::default(), ProfileSet::builtin())
        .assess(&common::copper_target())
        .unwrap();
    assert!(a.detections.iter().any(|d| d.mineral == "sericite"));
    // Illite is not diagnostic for copper but still completes the assemblage.
    assert!(!a.detections.iter().any(|d| d.mineral == "illite"));
    let phyllic = a
        .assemblages
        .iter()
        .find(|s| s.assemblage == AlterationAssemblage::Phyllic)
        .unwrap();
    assert_eq!(phyllic.required_fraction, 1.0);
    assert_eq!(phyllic.optional_coverage, 0.5);
}

#[test]
fn assemblages_ignore_detections_below_threshold() {
    let service = chemical_with(vec![detection("sericite", 0.6, 1.0), detection("illite", 0.04, 1.0)]);
    let a = service.assess(&copper_with_one_sample(1.0)).unwrap();
    let phyllic = &a.assemblages[0];
    assert_eq!(phyllic.assemblage, AlterationAssemblage::Phyllic);
    assert_eq!(phyllic.optional_coverage, 0.0);
}

#[test]
fn non_finite_data_quality_is_rejected() {
    let t = copper_with_one_sample(f64::NAN);
    let err = ChemicalLikelihood::new(ChemicalConfig::default(), ProfileSet::builtin())
        .compute(&t)
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Validation(_)));
}

#[test]
fn rule_service_reads_its_own_collection() {
    let mut t = GeologicalTarget::new("hc", Commodity::HydrocarbonOnshore);
    t.evidence.structural = vec![FieldObservation::new("anticline", 1.0, 0.5)];
    t.evidence.surface = vec![FieldObservation::new("oil_seep", 1.0, 1.0)];

    let structural = RuleLikelihood::structural(ProfileSet::builtin()).compute(&t).unwrap();
    let physical = RuleLikelihood::physical(ProfileSet::builtin()).compute(&t).unwrap();
    let surface = RuleLikelihood::surface(ProfileSet::builtin()).compute(&t).unwrap();

    assert!((structural.mean - 1.5).abs() < 1e-12);
    assert_eq!(physical.mean, 1.0);
    assert!((surface.mean - 2.0).abs() < 1e-12);
}

#[test]
fn rule_likelihood_is_capped() {
    let mut t = GeologicalTarget::new("cu", Commodity::CopperPorphyry);
    t.evidence.physical = (0..5)
        .map(|_| FieldObservation::new("magnetic_high", 1.0, 1.0))
        .collect();
    let l = RuleLikelihood::physical(ProfileSet::builtin()).compute(&t).unwrap();
    assert_eq!(l.mean, 5.0);
}

#[test]
fn non_finite_observation_is_rejected() {
    let mut t = GeologicalTarget::new("cu", Commodity::CopperPorphyry);
    t.evidence.surface = vec![FieldObservation::new("gossan", f64::INFINITY, 1.0)];
    assert!(RuleLikelihood::surface(ProfileSet::builtin()).compute(&t).is_err());
}

#[test]
fn suite_returns_one_likelihood_per_type_in_order() {
    let suite = LikelihoodSuite::new(&VetaConfig::default());
    assert_eq!(suite.len(), 4);
    let all = suite.compute_all(&common::copper_target()).unwrap();
    let types: Vec<EvidenceType> = all.iter().map(|l| l.evidence_type).collect();
    assert_eq!(
        types,
        vec![
            EvidenceType::Chemical,
            EvidenceType::Structural,
            EvidenceType::Physical,
            EvidenceType::Surface
        ]
    );
    assert!(all[1].is_supportive());
}

#[test]
fn suite_propagates_the_first_error() {
    let mut t = common::copper_target();
    t.evidence.structural = vec![FieldObservation::new("lineament", f64::NAN, 1.0)];
    let err = LikelihoodSuite::new(&VetaConfig::default()).compute_all(&t).unwrap_err();
    assert!(matches!(err, AnalysisError::Validation(_)));
}

#[test]
fn custom_services_replace_the_defaults() {
    let chemical: Box<dyn EvidenceLikelihood> = Box::new(chemical_with(vec![detection("sericite", 0.8, 1.0)]));
    let suite = LikelihoodSuite::with_services(vec![chemical]);
    assert_eq!(suite.len(), 1);
    let all = suite.compute_all(&copper_with_one_sample(1.0)).unwrap();
    assert_eq!(all.len(), 1);
    assert!((all[0].mean - 0.8 * (1.0 + 1.0 / 7.0)).abs() < 1e-12);
}
