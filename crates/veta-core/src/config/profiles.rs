//! Commodity profiles: the per-commodity lookup tables every engine reads.
//!
//! Built-in profiles are compiled in. A config file may override parts of a
//! profile; overrides are merged field-by-field over the built-in values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Commodity, MetamorphicGrade, WeatheringIntensity};

/// Everything the engines need to know about one deposit model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityProfile {
    pub commodity: Commodity,
    /// Permissive age window (min, max) in Ma.
    pub age_window_ma: (f64, f64),
    /// Tectonic setting → compatibility in [0.0, 1.0].
    pub tectonic_compatibility: BTreeMap<String, f64>,
    /// Compatibility for settings not in the table.
    pub tectonic_default: f64,
    /// Host lithology → permissibility in [0.0, 1.0].
    pub permissive_lithologies: BTreeMap<String, f64>,
    /// Minerals whose detection is diagnostic for this deposit model.
    pub diagnostic_minerals: Vec<String>,
    /// Facies compatible with the deposit model.
    pub compatible_facies: Vec<String>,
    /// Observation kind → signed weight for the rule-based evidence services.
    pub observation_rules: BTreeMap<String, f64>,
    pub requires_reservoir: bool,
    pub requires_seal: bool,
    pub requires_trap: bool,
    pub requires_closed_basin: bool,
    pub requires_sealing_faults: bool,
    pub requires_charge_timing: bool,
    pub min_reservoir_thickness_m: Option<f64>,
    pub min_closure_km2: Option<f64>,
    /// Minimum basin age (Ma) for the system to have matured.
    pub min_basin_age_ma: Option<f64>,
    pub max_uplift_m: f64,
    pub max_erosion_m: f64,
    /// Highest tolerated metamorphic grade.
    pub max_metamorphic_grade: MetamorphicGrade,
    /// Highest tolerated weathering intensity.
    pub max_weathering: WeatheringIntensity,
}

impl CommodityProfile {
    /// The compiled-in profile for a commodity.
    pub fn builtin(commodity: Commodity) -> Self {
        match commodity {
            Commodity::CopperPorphyry => copper_porphyry(),
            Commodity::LithiumBrine => lithium_brine(),
            Commodity::HydrocarbonOnshore => hydrocarbon_onshore(),
            Commodity::HydrocarbonOffshore => hydrocarbon_offshore(),
        }
    }

    /// Tectonic compatibility for a setting, falling back to the default.
    pub fn tectonic_score(&self, setting: &str) -> f64 {
        self.tectonic_compatibility
            .get(&normalize_key(setting))
            .copied()
            .unwrap_or(self.tectonic_default)
    }

    /// Permissibility of a host lithology, if the table lists it.
    pub fn lithology_score(&self, lithology: &str) -> Option<f64> {
        self.permissive_lithologies.get(&normalize_key(lithology)).copied()
    }

    pub fn is_compatible_facies(&self, facies: &str) -> bool {
        let key = normalize_key(facies);
        self.compatible_facies.iter().any(|f| *f == key)
    }

    /// Signed weight for an observation kind (0.0 when unlisted).
    pub fn observation_weight(&self, kind: &str) -> f64 {
        self.observation_rules
            .get(&normalize_key(kind))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn age_window_centre(&self) -> f64 {
        (self.age_window_ma.0 + self.age_window_ma.1) / 2.0
    }

    pub fn age_window_width(&self) -> f64 {
        (self.age_window_ma.1 - self.age_window_ma.0).max(f64::EPSILON)
    }

    /// Apply a partial override on top of this profile.
    pub fn apply(&mut self, ov: &ProfileOverride) {
        if let Some(window) = ov.age_window_ma {
            self.age_window_ma = window;
        }
        for (setting, score) in &ov.tectonic_compatibility {
            self.tectonic_compatibility
                .insert(normalize_key(setting), *score);
        }
        if let Some(v) = ov.tectonic_default {
            self.tectonic_default = v;
        }
        for (lithology, score) in &ov.permissive_lithologies {
            self.permissive_lithologies
                .insert(normalize_key(lithology), *score);
        }
        if let Some(ref minerals) = ov.diagnostic_minerals {
            self.diagnostic_minerals = minerals.clone();
        }
        if ov.min_reservoir_thickness_m.is_some() {
            self.min_reservoir_thickness_m = ov.min_reservoir_thickness_m;
        }
        if ov.min_closure_km2.is_some() {
            self.min_closure_km2 = ov.min_closure_km2;
        }
        if let Some(v) = ov.max_uplift_m {
            self.max_uplift_m = v;
        }
        if let Some(v) = ov.max_erosion_m {
            self.max_erosion_m = v;
        }
    }
}

/// Partial profile override from a config file. Unset fields keep the
/// built-in value; table entries are merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOverride {
    pub age_window_ma: Option<(f64, f64)>,
    pub tectonic_compatibility: BTreeMap<String, f64>,
    pub tectonic_default: Option<f64>,
    pub permissive_lithologies: BTreeMap<String, f64>,
    pub diagnostic_minerals: Option<Vec<String>>,
    pub min_reservoir_thickness_m: Option<f64>,
    pub min_closure_km2: Option<f64>,
    pub max_uplift_m: Option<f64>,
    pub max_erosion_m: Option<f64>,
}

/// Resolved profiles for every commodity, built once per engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSet {
    profiles: BTreeMap<Commodity, CommodityProfile>,
}

impl ProfileSet {
    /// Built-in profiles merged with the given overrides.
    pub fn resolve(overrides: &BTreeMap<String, ProfileOverride>) -> Self {
        let profiles = Commodity::all()
            .iter()
            .map(|&commodity| {
                let mut profile = CommodityProfile::builtin(commodity);
                if let Some(ov) = overrides.get(commodity.as_str()) {
                    profile.apply(ov);
                }
                (commodity, profile)
            })
            .collect();
        Self { profiles }
    }

    pub fn builtin() -> Self {
        Self::resolve(&BTreeMap::new())
    }

    pub fn get(&self, commodity: Commodity) -> &CommodityProfile {
        // Every commodity is inserted by `resolve`.
        &self.profiles[&commodity]
    }

    /// Replace one profile wholesale (test tables, experiments).
    pub fn with_profile(mut self, profile: CommodityProfile) -> Self {
        self.profiles.insert(profile.commodity, profile);
        self
    }
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Table keys are lower snake_case.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace([' ', '-'], "_")
}

fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn list(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

fn copper_porphyry() -> CommodityProfile {
    CommodityProfile {
        commodity: Commodity::CopperPorphyry,
        age_window_ma: (2.0, 180.0),
        tectonic_compatibility: table(&[
            ("continental_arc", 1.0),
            ("island_arc", 0.85),
            ("post_collisional", 0.7),
            ("back_arc", 0.4),
            ("continental_rift", 0.2),
            ("passive_margin", 0.05),
            ("craton", 0.05),
            ("mid_ocean_ridge", 0.02),
        ]),
        tectonic_default: 0.1,
        permissive_lithologies: table(&[
            ("granodiorite", 1.0),
            ("quartz_monzonite", 1.0),
            ("tonalite", 0.85),
            ("diorite", 0.8),
            ("andesite", 0.7),
            ("dacite", 0.6),
            ("volcaniclastic", 0.5),
            ("limestone", 0.4),
            ("sandstone", 0.2),
        ]),
        diagnostic_minerals: list(&[
            "sericite",
            "kaolinite",
            "alunite",
            "pyrophyllite",
            "chlorite",
            "epidote",
            "biotite",
        ]),
        compatible_facies: list(&[
            "porphyritic_intrusive",
            "intrusive",
            "subvolcanic",
            "volcanic_arc",
            "volcaniclastic",
        ]),
        observation_rules: table(&[
            ("fault_intersection", 1.0),
            ("lineament", 1.0),
            ("ring_fracture", 1.0),
            ("magnetic_high", 1.0),
            ("magnetic_low", 1.0),
            ("chargeability_high", 1.0),
            ("resistivity_low", 1.0),
            ("gossan", 1.0),
            ("cu_soil_anomaly", 1.0),
            ("mo_soil_anomaly", 1.0),
            ("thick_cover", -0.5),
            ("undeformed_platform", -0.5),
            ("barren_outcrop", -0.5),
        ]),
        requires_reservoir: false,
        requires_seal: false,
        requires_trap: false,
        requires_closed_basin: false,
        requires_sealing_faults: false,
        requires_charge_timing: false,
        min_reservoir_thickness_m: None,
        min_closure_km2: None,
        min_basin_age_ma: None,
        max_uplift_m: 6000.0,
        max_erosion_m: 4000.0,
        max_metamorphic_grade: MetamorphicGrade::Greenschist,
        max_weathering: WeatheringIntensity::Intense,
    }
}

fn lithium_brine() -> CommodityProfile {
    CommodityProfile {
        commodity: Commodity::LithiumBrine,
        age_window_ma: (0.0, 10.0),
        tectonic_compatibility: table(&[
            ("intermontane_basin", 1.0),
            ("back_arc", 0.9),
            ("continental_rift", 0.8),
            ("continental_arc", 0.6),
            ("foreland_basin", 0.4),
            ("passive_margin", 0.05),
        ]),
        tectonic_default: 0.1,
        permissive_lithologies: table(&[
            ("evaporite", 1.0),
            ("halite", 1.0),
            ("lacustrine_clay", 0.9),
            ("ignimbrite", 0.8),
            ("volcaniclastic", 0.7),
            ("alluvial_sand", 0.6),
        ]),
        diagnostic_minerals: list(&["hectorite", "montmorillonite", "gypsum", "borax", "ulexite"]),
        compatible_facies: list(&[
            "evaporitic_lacustrine",
            "lacustrine",
            "playa",
            "salar",
            "alluvial_fan",
        ]),
        observation_rules: table(&[
            ("closed_drainage", 1.0),
            ("bounding_fault", 1.0),
            ("geothermal_spring", 1.0),
            ("gravity_low", 1.0),
            ("conductivity_high", 1.0),
            ("salar_crust", 1.0),
            ("li_brine_sample", 1.0),
            ("fresh_inflow", -0.5),
            ("open_drainage", -0.5),
        ]),
        requires_reservoir: true,
        requires_seal: false,
        requires_trap: false,
        requires_closed_basin: true,
        requires_sealing_faults: false,
        requires_charge_timing: false,
        min_reservoir_thickness_m: Some(10.0),
        min_closure_km2: None,
        min_basin_age_ma: None,
        max_uplift_m: 500.0,
        max_erosion_m: 200.0,
        max_metamorphic_grade: MetamorphicGrade::Zeolite,
        max_weathering: WeatheringIntensity::Complete,
    }
}

fn hydrocarbon_common(commodity: Commodity) -> CommodityProfile {
    CommodityProfile {
        commodity,
        age_window_ma: (20.0, 450.0),
        tectonic_compatibility: table(&[
            ("foreland_basin", 1.0),
            ("continental_rift", 0.9),
            ("intracratonic_basin", 0.8),
            ("passive_margin", 0.7),
            ("back_arc", 0.6),
            ("continental_arc", 0.2),
        ]),
        tectonic_default: 0.1,
        permissive_lithologies: table(&[
            ("sandstone", 1.0),
            ("carbonate", 0.9),
            ("limestone", 0.9),
            ("dolomite", 0.9),
            ("shale", 0.8),
            ("conglomerate", 0.6),
            ("granite", 0.05),
        ]),
        diagnostic_minerals: list(&["kaolinite", "calcite", "siderite", "illite", "gypsum"]),
        compatible_facies: list(&[
            "fluvial",
            "deltaic",
            "shallow_marine",
            "deep_marine",
            "carbonate_platform",
            "eolian",
            "turbidite",
        ]),
        observation_rules: table(&[
            ("anticline", 1.0),
            ("fault_closure", 1.0),
            ("salt_dome", 1.0),
            ("gravity_anomaly", 1.0),
            ("magnetic_basement_high", 1.0),
            ("oil_seep", 1.0),
            ("gas_seep", 1.0),
            ("bright_spot", 1.0),
            ("flat_spot", 1.0),
            ("breached_crest", -0.5),
            ("dry_hole", -0.5),
        ]),
        requires_reservoir: true,
        requires_seal: true,
        requires_trap: true,
        requires_closed_basin: true,
        requires_sealing_faults: true,
        requires_charge_timing: true,
        min_reservoir_thickness_m: Some(5.0),
        min_closure_km2: Some(1.0),
        min_basin_age_ma: Some(10.0),
        max_uplift_m: 3000.0,
        max_erosion_m: 2500.0,
        max_metamorphic_grade: MetamorphicGrade::PrehnitePumpellyite,
        max_weathering: WeatheringIntensity::Complete,
    }
}

fn hydrocarbon_onshore() -> CommodityProfile {
    hydrocarbon_common(Commodity::HydrocarbonOnshore)
}

fn hydrocarbon_offshore() -> CommodityProfile {
    let mut profile = hydrocarbon_common(Commodity::HydrocarbonOffshore);
    profile.age_window_ma = (5.0, 200.0);
    profile.tectonic_compatibility = table(&[
        ("passive_margin", 1.0),
        ("continental_rift", 0.8),
        ("back_arc", 0.7),
        ("foreland_basin", 0.6),
        ("continental_arc", 0.2),
    ]);
    profile.min_reservoir_thickness_m = Some(10.0);
    profile.min_closure_km2 = Some(5.0);
    profile.max_uplift_m = 2000.0;
    profile.max_erosion_m = 1500.0;
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_commodity_has_a_profile() {
        let set = ProfileSet::builtin();
        for &c in Commodity::all() {
            assert_eq!(set.get(c).commodity, c);
        }
    }

    #[test]
    fn override_merges_over_builtin() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "copper_porphyry".to_string(),
            ProfileOverride {
                max_uplift_m: Some(9000.0),
                tectonic_compatibility: table(&[("Back Arc", 0.9)]),
                ..ProfileOverride::default()
            },
        );
        let set = ProfileSet::resolve(&overrides);
        let cu = set.get(Commodity::CopperPorphyry);
        assert_eq!(cu.max_uplift_m, 9000.0);
        assert_eq!(cu.tectonic_score("back_arc"), 0.9);
        // Untouched entries keep built-in values.
        assert_eq!(cu.tectonic_score("continental_arc"), 1.0);
        assert_eq!(cu.max_erosion_m, 4000.0);
    }

    #[test]
    fn unknown_setting_uses_default() {
        let cu = CommodityProfile::builtin(Commodity::CopperPorphyry);
        assert_eq!(cu.tectonic_score("somewhere_else"), 0.1);
    }
}
