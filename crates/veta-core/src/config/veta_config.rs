//! Top-level Veta configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ChemicalConfig, CollapseConfig, FusionConfig, PriorConfig, ProfileOverride, ProfileSet};
use crate::errors::ConfigError;
use crate::types::Commodity;

/// Project config file name looked up in the analysis root.
pub const CONFIG_FILE_NAME: &str = "veta.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VETA_*`)
/// 2. Project config (`veta.toml` in the analysis root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VetaConfig {
    pub prior: PriorConfig,
    pub chemical: ChemicalConfig,
    pub fusion: FusionConfig,
    pub collapse: CollapseConfig,
    /// Per-commodity overrides keyed by commodity name.
    pub profiles: BTreeMap<String, ProfileOverride>,
}

impl VetaConfig {
    /// Load configuration from `root/veta.toml` (if present) and the
    /// environment, then validate.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;

        tracing::debug!(path = %path.display(), "veta config resolved");
        Ok(config)
    }

    /// Read a single TOML file. Keys absent from the file keep defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.prior;
        if !(0.0..=1.0).contains(&p.floor) || !(0.0..=1.0).contains(&p.ceiling) {
            return Err(failed("prior.floor", "floor and ceiling must be within [0.0, 1.0]"));
        }
        if p.floor > p.ceiling {
            return Err(failed("prior.floor", "must not exceed prior.ceiling"));
        }
        if p.variance_scale < 0.0 {
            return Err(failed("prior.variance_scale", "must be non-negative"));
        }

        let c = &self.chemical;
        if c.likelihood_cap <= 0.0 {
            return Err(failed("chemical.likelihood_cap", "must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&c.detection_threshold) {
            return Err(failed("chemical.detection_threshold", "must be between 0.0 and 1.0"));
        }

        let f = &self.fusion;
        if !(0.0 < f.credible_level && f.credible_level < 1.0) {
            return Err(failed("fusion.credible_level", "must be strictly between 0.0 and 1.0"));
        }
        if !(0.0..=1.0).contains(&f.correction_threshold) {
            return Err(failed("fusion.correction_threshold", "must be between 0.0 and 1.0"));
        }
        if f.normalization_floor <= 0.0 {
            return Err(failed("fusion.normalization_floor", "must be greater than 0"));
        }
        if let Some(entry) = f.correlations.iter().find(|e| !(-1.0..=1.0).contains(&e.value)) {
            return Err(failed(
                "fusion.correlations",
                format!("{}/{} correlation {} outside [-1.0, 1.0]", entry.a, entry.b, entry.value),
            ));
        }

        let k = &self.collapse;
        for (field, value) in [
            ("collapse.convergence_threshold", k.convergence_threshold),
            ("collapse.medium_convergence_threshold", k.medium_convergence_threshold),
            ("collapse.uncertainty_reduction_threshold", k.uncertainty_reduction_threshold),
            ("collapse.independence_limit", k.independence_limit),
            ("collapse.divergent_threshold", k.divergent_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(failed(field, "must be between 0.0 and 1.0"));
            }
        }
        if k.medium_convergence_threshold > k.convergence_threshold {
            return Err(failed(
                "collapse.medium_convergence_threshold",
                "must not exceed collapse.convergence_threshold",
            ));
        }

        for (name, ov) in &self.profiles {
            if Commodity::from_name(name).is_none() {
                return Err(failed(&format!("profiles.{name}"), "unknown commodity"));
            }
            if let Some((lo, hi)) = ov.age_window_ma {
                if lo > hi {
                    return Err(failed(
                        &format!("profiles.{name}.age_window_ma"),
                        "minimum age exceeds maximum age",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Built-in commodity profiles merged with this config's overrides.
    pub fn resolve_profiles(&self) -> ProfileSet {
        ProfileSet::resolve(&self.profiles)
    }

    /// Apply environment variable overrides.
    /// Pattern: `VETA_PRIOR_FLOOR`, `VETA_FUSION_CREDIBLE_LEVEL`, etc.
    fn apply_env_overrides(config: &mut VetaConfig) {
        let env_f64 = |key: &str| std::env::var(key).ok().and_then(|v| v.parse::<f64>().ok());

        if let Some(v) = env_f64("VETA_PRIOR_FLOOR") {
            config.prior.floor = v;
        }
        if let Some(v) = env_f64("VETA_PRIOR_CEILING") {
            config.prior.ceiling = v;
        }
        if let Some(v) = env_f64("VETA_CHEMICAL_LIKELIHOOD_CAP") {
            config.chemical.likelihood_cap = v;
        }
        if let Some(v) = env_f64("VETA_FUSION_CREDIBLE_LEVEL") {
            config.fusion.credible_level = v;
        }
        if let Some(v) = env_f64("VETA_FUSION_CORRECTION_THRESHOLD") {
            config.fusion.correction_threshold = v;
        }
        if let Some(v) = env_f64("VETA_COLLAPSE_CONVERGENCE_THRESHOLD") {
            config.collapse.convergence_threshold = v;
        }
        if let Ok(val) = std::env::var("VETA_FUSION_NORMALIZATION") {
            match val.trim() {
                "evidence_product" => config.fusion.normalization = super::NormalizationMode::EvidenceProduct,
                "binary_odds" => config.fusion.normalization = super::NormalizationMode::BinaryOdds,
                other => tracing::warn!(value = other, "ignoring unknown VETA_FUSION_NORMALIZATION"),
            }
        }
    }
}

fn failed(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.into(),
    }
}
