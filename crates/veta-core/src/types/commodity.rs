//! Commodity and evidence-type identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The deposit models the engine knows how to assess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Commodity {
    CopperPorphyry,
    LithiumBrine,
    HydrocarbonOnshore,
    HydrocarbonOffshore,
}

impl Commodity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CopperPorphyry => "copper_porphyry",
            Self::LithiumBrine => "lithium_brine",
            Self::HydrocarbonOnshore => "hydrocarbon_onshore",
            Self::HydrocarbonOffshore => "hydrocarbon_offshore",
        }
    }

    pub fn all() -> &'static [Commodity] {
        &[
            Self::CopperPorphyry,
            Self::LithiumBrine,
            Self::HydrocarbonOnshore,
            Self::HydrocarbonOffshore,
        ]
    }

    /// Parse a snake_case commodity name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == name)
    }

    /// Onshore and offshore hydrocarbon plays share most of their geology.
    pub fn is_hydrocarbon(&self) -> bool {
        matches!(self, Self::HydrocarbonOnshore | Self::HydrocarbonOffshore)
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four independent lines of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    Chemical,
    Structural,
    Physical,
    Surface,
}

impl EvidenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chemical => "chemical",
            Self::Structural => "structural",
            Self::Physical => "physical",
            Self::Surface => "surface",
        }
    }

    pub fn all() -> &'static [EvidenceType] {
        &[Self::Chemical, Self::Structural, Self::Physical, Self::Surface]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|e| e.as_str() == name)
    }
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
