//! Tests for the Veta configuration system.

use std::sync::Mutex;

use veta_core::config::{MaxCorrelationMode, NormalizationMode, VetaConfig};
use veta_core::errors::ConfigError;
use veta_core::types::{Commodity, EvidenceType};

/// Serializes tests that touch `VETA_*` environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_veta_env_vars() {
    for key in [
        "VETA_PRIOR_FLOOR",
        "VETA_PRIOR_CEILING",
        "VETA_CHEMICAL_LIKELIHOOD_CAP",
        "VETA_FUSION_CREDIBLE_LEVEL",
        "VETA_FUSION_CORRECTION_THRESHOLD",
        "VETA_COLLAPSE_CONVERGENCE_THRESHOLD",
        "VETA_FUSION_NORMALIZATION",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_yields_defaults() {
    let config = VetaConfig::from_toml("").unwrap();
    assert_eq!(config, VetaConfig::default());
    assert_eq!(config.prior.floor, 0.01);
    assert_eq!(config.prior.ceiling, 0.3);
    assert_eq!(config.fusion.credible_level, 0.95);
    assert_eq!(config.fusion.max_correlation_mode, MaxCorrelationMode::RowMaxMinusDiagonal);
    assert_eq!(config.fusion.normalization, NormalizationMode::EvidenceProduct);
    assert_eq!(config.collapse.min_supportive, 2);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = VetaConfig::from_toml(
        r#"
[prior]
ceiling = 0.25

[fusion]
normalization = "binary_odds"
"#,
    )
    .unwrap();
    assert_eq!(config.prior.ceiling, 0.25);
    assert_eq!(config.prior.floor, 0.01);
    assert_eq!(config.fusion.normalization, NormalizationMode::BinaryOdds);
    assert_eq!(config.fusion.correction_threshold, 0.7);
    assert_eq!(
        config.fusion.correlation(EvidenceType::Chemical, EvidenceType::Surface),
        0.7
    );
}

#[test]
fn toml_roundtrip_preserves_values() {
    let mut config = VetaConfig::default();
    config.collapse.convergence_threshold = 0.85;
    config.fusion.max_correlation_mode = MaxCorrelationMode::ExcludeDiagonal;

    let text = config.to_toml().unwrap();
    let back = VetaConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = VetaConfig::from_toml("[prior\nfloor = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn floor_above_ceiling_fails_validation() {
    let config = VetaConfig::from_toml("[prior]\nfloor = 0.5\nceiling = 0.3\n").unwrap();
    match config.validate() {
        Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, "prior.floor"),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn out_of_range_correlation_fails_validation() {
    let mut config = VetaConfig::default();
    config.fusion = config
        .fusion
        .with_correlation(EvidenceType::Chemical, EvidenceType::Physical, 1.5);
    assert!(config.validate().is_err());
}

#[test]
fn unknown_commodity_profile_fails_validation() {
    let config = VetaConfig::from_toml("[profiles.gold_orogenic]\nmax_uplift_m = 100.0\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("gold_orogenic"));
}

#[test]
fn profile_override_is_merged() {
    let config = VetaConfig::from_toml(
        r#"
[profiles.lithium_brine]
age_window_ma = [0.0, 20.0]
max_erosion_m = 400.0

[profiles.lithium_brine.tectonic_compatibility]
foreland_basin = 0.7
"#,
    )
    .unwrap();
    config.validate().unwrap();

    let profiles = config.resolve_profiles();
    let li = profiles.get(Commodity::LithiumBrine);
    assert_eq!(li.age_window_ma, (0.0, 20.0));
    assert_eq!(li.max_erosion_m, 400.0);
    assert_eq!(li.tectonic_score("foreland_basin"), 0.7);
    assert_eq!(li.tectonic_score("intermontane_basin"), 1.0);
    // Other commodities untouched.
    let cu = profiles.get(Commodity::CopperPorphyry);
    assert_eq!(cu.age_window_ma, (2.0, 180.0));
}

#[test]
fn load_without_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_veta_env_vars();

    let dir = tempdir();
    let config = VetaConfig::load(dir.path()).unwrap();
    assert_eq!(config, VetaConfig::default());
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_veta_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("veta.toml"),
        "[prior]\nceiling = 0.2\n\n[fusion]\ncredible_level = 0.9\n",
    )
    .unwrap();
    std::env::set_var("VETA_FUSION_CREDIBLE_LEVEL", "0.99");

    let config = VetaConfig::load(dir.path()).unwrap();
    assert_eq!(config.prior.ceiling, 0.2);
    assert_eq!(config.fusion.credible_level, 0.99);
    assert_eq!(config.fusion.z_score(), 2.576);

    clear_veta_env_vars();
}

#[test]
fn load_rejects_invalid_env_value() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_veta_env_vars();

    let dir = tempdir();
    std::env::set_var("VETA_PRIOR_FLOOR", "0.9");
    let result = VetaConfig::load(dir.path());
    clear_veta_env_vars();

    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}
