//! Playbook tables and results.

use serde::{Deserialize, Serialize};
use std::fmt;

use veta_core::config::CommodityProfile;
use veta_core::types::{Commodity, GeologicalTarget};

use super::{copper_porphyry, hydrocarbon, lithium_brine};
use crate::likelihood::chemical::SpectralScan;

/// Outcome of one mandatory predicate: `(passed, certainty, detail)`.
pub type MandatoryCheck = fn(&GeologicalTarget, &CommodityProfile) -> (bool, f64, String);

/// Kill predicate: `Some(detail)` when triggered.
pub type KillCheck = fn(&GeologicalTarget, &CommodityProfile) -> Option<String>;

/// Supportive predicate: strength in [0.0, 1.0].
#[derive(Debug, Clone, Copy)]
pub enum SupportiveScore {
    /// Scored from the context sections and field observations.
    Context(fn(&GeologicalTarget, &CommodityProfile) -> f64),
    /// Scored from the engine's unmixing pass over the spectral samples.
    Spectral(fn(&SpectralScan) -> f64),
}

#[derive(Debug, Clone, Copy)]
pub struct MandatoryCondition {
    pub name: &'static str,
    pub description: &'static str,
    pub check: MandatoryCheck,
}

#[derive(Debug, Clone, Copy)]
pub struct KillFactor {
    pub name: &'static str,
    pub description: &'static str,
    pub check: KillCheck,
}

#[derive(Debug, Clone, Copy)]
pub struct SupportiveEvidence {
    pub name: &'static str,
    pub description: &'static str,
    pub score: SupportiveScore,
}

/// The deposit-model playbooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "playbook", rename_all = "snake_case")]
pub enum Playbook {
    CopperPorphyry,
    LithiumBrine,
    HydrocarbonOnshore,
    HydrocarbonOffshore,
}

impl Playbook {
    pub fn for_commodity(commodity: Commodity) -> Self {
        match commodity {
            Commodity::CopperPorphyry => Self::CopperPorphyry,
            Commodity::LithiumBrine => Self::LithiumBrine,
            Commodity::HydrocarbonOnshore => Self::HydrocarbonOnshore,
            Commodity::HydrocarbonOffshore => Self::HydrocarbonOffshore,
        }
    }

    pub fn commodity(&self) -> Commodity {
        match self {
            Self::CopperPorphyry => Commodity::CopperPorphyry,
            Self::LithiumBrine => Commodity::LithiumBrine,
            Self::HydrocarbonOnshore => Commodity::HydrocarbonOnshore,
            Self::HydrocarbonOffshore => Commodity::HydrocarbonOffshore,
        }
    }

    pub fn mandatory(&self) -> &'static [MandatoryCondition] {
        match self {
            Self::CopperPorphyry => copper_porphyry::MANDATORY,
            Self::LithiumBrine => lithium_brine::MANDATORY,
            Self::HydrocarbonOnshore | Self::HydrocarbonOffshore => hydrocarbon::MANDATORY,
        }
    }

    pub fn kill_factors(&self) -> &'static [KillFactor] {
        match self {
            Self::CopperPorphyry => copper_porphyry::KILL_FACTORS,
            Self::LithiumBrine => lithium_brine::KILL_FACTORS,
            Self::HydrocarbonOnshore | Self::HydrocarbonOffshore => hydrocarbon::KILL_FACTORS,
        }
    }

    pub fn supportive(&self) -> &'static [SupportiveEvidence] {
        match self {
            Self::CopperPorphyry => copper_porphyry::SUPPORTIVE,
            Self::LithiumBrine => lithium_brine::SUPPORTIVE,
            Self::HydrocarbonOnshore | Self::HydrocarbonOffshore => hydrocarbon::SUPPORTIVE,
        }
    }
}

impl fmt::Display for Playbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.commodity().as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandatoryResult {
    pub name: String,
    pub passed: bool,
    pub certainty: f64,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandatoryOutcome {
    pub all_passed: bool,
    pub failed_condition: Option<String>,
    pub triggers_veto: bool,
    /// Results up to and including the first failure.
    pub results: Vec<MandatoryResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggeredKill {
    pub name: String,
    pub description: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillOutcome {
    pub killed: bool,
    pub requires_veto: bool,
    pub triggered: Vec<TriggeredKill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportiveItem {
    pub name: String,
    pub strength: f64,
    pub description: String,
}

impl SupportiveItem {
    pub fn new(name: &str, strength: f64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            strength,
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    Favorable,
    Marginal,
    Unfavorable,
}

impl Assessment {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::Marginal => "marginal",
            Self::Unfavorable => "unfavorable",
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybookResult {
    pub commodity: Commodity,
    pub mandatory: MandatoryOutcome,
    pub kill_factors: KillOutcome,
    /// Evidence with strength > 0.1, strongest first.
    pub supportive: Vec<SupportiveItem>,
    pub assessment: Assessment,
    pub confidence: f64,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
}
