//! The geological target descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::commodity::Commodity;
use super::evidence::EvidenceCollections;

fn full_certainty() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Stratigraphic context: reservoir/seal units, facies, thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stratigraphy {
    pub reservoir_unit: Option<String>,
    pub seal_unit: Option<String>,
    /// Dominant facies, e.g. `"porphyritic_intrusive"`, `"evaporitic_lacustrine"`.
    pub facies: String,
    pub reservoir_thickness_m: Option<f64>,
    /// How well constrained this section is, in [0.0, 1.0].
    #[serde(default = "full_certainty")]
    pub certainty: f64,
}

/// Structural context: trap, closure, seal flags, timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub trap_type: Option<String>,
    pub closure_area_km2: Option<f64>,
    pub fault_seal_intact: bool,
    pub basin_sealed: bool,
    /// Age of trap formation (Ma).
    pub trap_age_ma: Option<f64>,
    /// Age of hydrocarbon charge / brine emplacement (Ma).
    pub charge_age_ma: Option<f64>,
    #[serde(default = "full_certainty")]
    pub certainty: f64,
}

impl Default for Stratigraphy {
    fn default() -> Self {
        Self {
            reservoir_unit: None,
            seal_unit: None,
            facies: String::new(),
            reservoir_thickness_m: None,
            certainty: full_certainty(),
        }
    }
}

impl Default for Structure {
    fn default() -> Self {
        Self {
            trap_type: None,
            closure_area_km2: None,
            fault_seal_intact: false,
            basin_sealed: false,
            trap_age_ma: None,
            charge_age_ma: None,
            certainty: full_certainty(),
        }
    }
}

/// Metamorphic grade, ordered from unmetamorphosed upward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetamorphicGrade {
    #[default]
    None,
    Zeolite,
    PrehnitePumpellyite,
    Greenschist,
    Amphibolite,
    Granulite,
    Eclogite,
}

impl MetamorphicGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Zeolite => "zeolite",
            Self::PrehnitePumpellyite => "prehnite_pumpellyite",
            Self::Greenschist => "greenschist",
            Self::Amphibolite => "amphibolite",
            Self::Granulite => "granulite",
            Self::Eclogite => "eclogite",
        }
    }
}

impl fmt::Display for MetamorphicGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weathering intensity, ordered from fresh rock upward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatheringIntensity {
    #[default]
    Fresh,
    Slight,
    Moderate,
    Intense,
    Complete,
}

impl WeatheringIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Slight => "slight",
            Self::Moderate => "moderate",
            Self::Intense => "intense",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for WeatheringIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preservation state: how much of the system survived since formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preservation {
    pub uplift_m: f64,
    pub erosion_depth_m: f64,
    pub metamorphic_grade: MetamorphicGrade,
    pub weathering: WeatheringIntensity,
    #[serde(default = "full_certainty")]
    pub certainty: f64,
}

impl Default for Preservation {
    fn default() -> Self {
        Self {
            uplift_m: 0.0,
            erosion_depth_m: 0.0,
            metamorphic_grade: MetamorphicGrade::None,
            weathering: WeatheringIntensity::Fresh,
            certainty: full_certainty(),
        }
    }
}

/// A candidate site with its geological context and evidence.
///
/// Sections are optional because the ingestion layer may not have resolved
/// them. Checks that need an absent section fail with a validation error
/// instead of assuming a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeologicalTarget {
    pub id: String,
    pub commodity: Commodity,
    #[serde(default)]
    pub location: Location,
    pub tectonic_setting: String,
    /// Age string in the form `"N Ma"`.
    pub age: String,
    pub stratigraphy: Option<Stratigraphy>,
    pub structure: Option<Structure>,
    pub preservation: Option<Preservation>,
    #[serde(default)]
    pub evidence: EvidenceCollections,
}

impl GeologicalTarget {
    /// Create a target with empty context sections.
    pub fn new(id: &str, commodity: Commodity) -> Self {
        Self {
            id: id.to_string(),
            commodity,
            location: Location::default(),
            tectonic_setting: String::new(),
            age: String::new(),
            stratigraphy: None,
            structure: None,
            preservation: None,
            evidence: EvidenceCollections::default(),
        }
    }
}
