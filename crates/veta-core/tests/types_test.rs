//! Tests for the shared value types: the ingestion JSON shape, output
//! round-trips, and age/interval/classification properties.

use std::collections::BTreeMap;

use proptest::prelude::*;

use veta_core::config::VetaConfig;
use veta_core::constants::{AGE_FALLBACK_MA, LIKELIHOOD_CAP};
use veta_core::types::{
    parse_age, Commodity, ConfidenceClass, EvidenceType, GeologicalTarget, LikelihoodDistribution,
    MetamorphicGrade, PosteriorDistribution, WeatheringIntensity,
};

const TARGET_JSON: &str = r#"{
    "id": "cu-7",
    "commodity": "copper_porphyry",
    "tectonic_setting": "continental_arc",
    "age": "38 Ma",
    "stratigraphy": { "reservoir_unit": null, "seal_unit": null, "facies": "porphyritic_intrusive", "reservoir_thickness_m": null },
    "structure": null,
    "preservation": { "uplift_m": 1200.0, "erosion_depth_m": 800.0, "metamorphic_grade": "greenschist", "weathering": "moderate", "certainty": 0.6 },
    "evidence": {
        "chemical": { "samples": [ { "sample_id": "s1", "features": [ { "wavelength_nm": 2200.0, "depth": 0.4 } ] } ] },
        "structural": [ { "kind": "fault_intersection", "strength": 0.7, "confidence": 0.9 } ]
    }
}"#;

#[test]
fn target_reads_the_ingestion_shape() {
    let target: GeologicalTarget = serde_json::from_str(TARGET_JSON).unwrap();

    assert_eq!(target.commodity, Commodity::CopperPorphyry);
    assert_eq!(target.location.latitude, 0.0);
    assert_eq!(target.stratigraphy.as_ref().unwrap().certainty, 1.0);
    assert!(target.structure.is_none());
    let preservation = target.preservation.as_ref().unwrap();
    assert_eq!(preservation.metamorphic_grade, MetamorphicGrade::Greenschist);
    assert_eq!(preservation.weathering, WeatheringIntensity::Moderate);
    assert_eq!(preservation.certainty, 0.6);
    assert_eq!(target.evidence.chemical.data_quality, 0.8);
    assert_eq!(target.evidence.chemical.samples[0].features.len(), 1);
    assert!(target.evidence.physical.is_empty());

    let json = serde_json::to_string(&target).unwrap();
    let back: GeologicalTarget = serde_json::from_str(&json).unwrap();
    assert_eq!(back, target);
}

#[test]
fn unknown_commodity_is_rejected() {
    let json = TARGET_JSON.replace("copper_porphyry", "gold_epithermal");
    assert!(serde_json::from_str::<GeologicalTarget>(&json).is_err());
}

#[test]
fn posterior_serializes_class_and_contribution_keys() {
    let posterior = PosteriorDistribution {
        mean: 0.72,
        variance: 0.01,
        confidence_class: ConfidenceClass::classify(0.72, 0.01),
        confidence_interval: (0.52, 0.92),
        credible_level: 0.95,
        contributions: BTreeMap::from([(EvidenceType::Chemical, 60.0), (EvidenceType::Surface, 40.0)]),
        normalization_constant: 0.72,
        vetoed: false,
        veto_reason: None,
    };

    let value = serde_json::to_value(&posterior).unwrap();
    assert_eq!(value["confidence_class"], "DRILL_JUSTIFIED");
    assert_eq!(value["contributions"]["chemical"], 60.0);

    let back: PosteriorDistribution = serde_json::from_value(value).unwrap();
    assert_eq!(back, posterior);

    let vetoed = PosteriorDistribution::vetoed("structural/basin_unsealed", 0.9);
    let back: PosteriorDistribution = serde_json::from_str(&serde_json::to_string(&vetoed).unwrap()).unwrap();
    assert_eq!(back, vetoed);
    assert_eq!(back.veto_reason.as_deref(), Some("structural/basin_unsealed"));
}

#[test]
fn config_survives_json() {
    let mut config = VetaConfig::default();
    config.prior.floor = 0.02;
    let back: VetaConfig = serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(back, config);
}

proptest! {
    #[test]
    fn whole_and_decimal_ages_parse(whole in 0u32..5000, tenths in 0u32..10) {
        let age = parse_age(&format!("{whole} Ma"));
        prop_assert!(!age.fallback);
        prop_assert_eq!(age.value_ma, f64::from(whole));

        let age = parse_age(&format!("{whole}.{tenths}Ma"));
        prop_assert!(!age.fallback);
        prop_assert!((age.value_ma - (f64::from(whole) + f64::from(tenths) / 10.0)).abs() < 1e-9);
    }

    #[test]
    fn any_age_string_yields_a_usable_value(input in ".{0,24}") {
        let age = parse_age(&input);
        prop_assert!(age.value_ma.is_finite() && age.value_ma >= 0.0);
        if age.fallback {
            prop_assert_eq!(age.value_ma, AGE_FALLBACK_MA);
        }
    }

    #[test]
    fn likelihood_interval_brackets_the_mean(mean in 0.0f64..LIKELIHOOD_CAP, variance in 0.0f64..4.0) {
        let l = LikelihoodDistribution::new(EvidenceType::Physical, mean, variance);
        let (low, high) = l.confidence_interval;
        prop_assert!(0.0 <= low && low <= mean);
        prop_assert!(mean <= high && high <= LIKELIHOOD_CAP);
    }

    #[test]
    fn class_never_drops_as_mean_rises(a in 0.0f64..1.0, b in 0.0f64..1.0, variance in 0.0f64..0.5) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ConfidenceClass::classify(lo, variance) <= ConfidenceClass::classify(hi, variance));
    }
}
