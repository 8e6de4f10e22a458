//! Configuration system for Veta.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.
//!
//! Lookup tables (correlations, tectonic compatibility, age windows,
//! commodity limits) live here as data so tests can swap them out.

pub mod chemical_config;
pub mod collapse_config;
pub mod fusion_config;
pub mod prior_config;
pub mod profiles;
pub mod veta_config;

pub use chemical_config::{ChemicalConfig, DetectionTerms};
pub use collapse_config::CollapseConfig;
pub use fusion_config::{CorrelationEntry, FusionConfig, MaxCorrelationMode, NormalizationMode};
pub use prior_config::PriorConfig;
pub use profiles::{CommodityProfile, ProfileOverride, ProfileSet};
pub use veta_config::VetaConfig;
