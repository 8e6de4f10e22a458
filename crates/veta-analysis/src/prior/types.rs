//! Prior engine inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Regional geological context for one analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionalContext {
    pub tectonic_setting: String,
    /// Age string in the form `"N Ma"`.
    pub age: String,
    /// Host lithologies mapped in the search area.
    pub host_lithologies: Vec<String>,
    /// Known deposits of the same type within the search area.
    pub known_deposits: u32,
    pub search_area_km2: f64,
}

impl RegionalContext {
    pub fn new(tectonic_setting: &str, age: &str) -> Self {
        Self {
            tectonic_setting: tectonic_setting.to_string(),
            age: age.to_string(),
            ..Self::default()
        }
    }

    pub fn with_lithologies(mut self, lithologies: &[&str]) -> Self {
        self.host_lithologies = lithologies.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_analogs(mut self, known_deposits: u32, search_area_km2: f64) -> Self {
        self.known_deposits = known_deposits;
        self.search_area_km2 = search_area_km2;
        self
    }
}

/// Input-quality problems surfaced on the prior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataQualityFlag {
    /// The age string could not be parsed; 100 Ma was assumed.
    AgeFallback,
    /// No host lithologies were supplied.
    StratigraphyMissing,
    /// Search area was zero or negative.
    NoSearchArea,
}

impl DataQualityFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AgeFallback => "age_fallback",
            Self::StratigraphyMissing => "stratigraphy_missing",
            Self::NoSearchArea => "no_search_area",
        }
    }
}

impl fmt::Display for DataQualityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
