//! Lithium brine playbook tables.

use veta_core::config::CommodityProfile;
use veta_core::types::GeologicalTarget;

use super::predicates::{age_in_window, not_assessed, observation_signal, tectonic_fit};
use super::types::{KillFactor, MandatoryCondition, SupportiveEvidence, SupportiveScore};
use crate::likelihood::chemical::SpectralScan;

/// Fresh-water signal above which the brine is considered diluted.
const FLUSHING_SIGNAL: f64 = 0.5;

pub static MANDATORY: &[MandatoryCondition] = &[
    MandatoryCondition {
        name: "closed_basin",
        description: "Hydrologically closed basin",
        check: closed_basin,
    },
    MandatoryCondition {
        name: "young_basin_fill",
        description: "Basin fill inside the brine age window",
        check: age_in_window,
    },
    MandatoryCondition {
        name: "brine_aquifer",
        description: "Porous aquifer able to hold brine",
        check: brine_aquifer,
    },
];

pub static KILL_FACTORS: &[KillFactor] = &[
    KillFactor {
        name: "fresh_water_flushing",
        description: "Fresh water inflow dilutes the brine",
        check: fresh_water_flushing,
    },
    KillFactor {
        name: "basin_drained",
        description: "Erosion breached the basin floor",
        check: basin_drained,
    },
];

pub static SUPPORTIVE: &[SupportiveEvidence] = &[
    SupportiveEvidence {
        name: "volcanic_lithium_source",
        description: "Setting with felsic volcanic lithium source",
        score: SupportiveScore::Context(tectonic_fit),
    },
    SupportiveEvidence {
        name: "evaporite_minerals",
        description: "Evaporite and lithium clay minerals in spectra",
        score: SupportiveScore::Spectral(evaporite_minerals),
    },
    SupportiveEvidence {
        name: "closed_drainage",
        description: "Mapped internal drainage and salar crust",
        score: SupportiveScore::Context(closed_drainage),
    },
    SupportiveEvidence {
        name: "geothermal_input",
        description: "Geothermal springs feeding the basin",
        score: SupportiveScore::Context(geothermal_input),
    },
    SupportiveEvidence {
        name: "conductive_brine",
        description: "Gravity low or high conductivity at depth",
        score: SupportiveScore::Context(conductive_brine),
    },
    SupportiveEvidence {
        name: "brine_sample",
        description: "Lithium measured in brine samples",
        score: SupportiveScore::Context(brine_sample),
    },
];

fn closed_basin(t: &GeologicalTarget, _p: &CommodityProfile) -> (bool, f64, String) {
    let Some(s) = &t.structure else {
        return not_assessed("structure");
    };
    let detail = if s.basin_sealed { "basin closed" } else { "basin drains outward" };
    (s.basin_sealed, s.certainty, detail.to_string())
}

fn brine_aquifer(t: &GeologicalTarget, _p: &CommodityProfile) -> (bool, f64, String) {
    let Some(s) = &t.stratigraphy else {
        return not_assessed("stratigraphy");
    };
    match s.reservoir_unit.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        Some(unit) => (true, s.certainty, format!("aquifer '{unit}'")),
        None => (false, s.certainty, "no aquifer unit".to_string()),
    }
}

fn fresh_water_flushing(t: &GeologicalTarget, _p: &CommodityProfile) -> Option<String> {
    let signal = observation_signal(t, &["fresh_inflow", "open_drainage"]);
    (signal > FLUSHING_SIGNAL).then(|| format!("fresh water signal {signal:.2}"))
}

fn basin_drained(t: &GeologicalTarget, p: &CommodityProfile) -> Option<String> {
    let s = t.preservation.as_ref()?;
    (s.erosion_depth_m > p.max_erosion_m)
        .then(|| format!("{} m eroded, limit {} m", s.erosion_depth_m, p.max_erosion_m))
}

fn evaporite_minerals(scan: &SpectralScan) -> f64 {
    scan.signal(&["hectorite", "gypsum", "borax", "ulexite", "montmorillonite"])
}

fn closed_drainage(t: &GeologicalTarget, _p: &CommodityProfile) -> f64 {
    observation_signal(t, &["closed_drainage", "salar_crust"])
}

fn geothermal_input(t: &GeologicalTarget, _p: &CommodityProfile) -> f64 {
    observation_signal(t, &["geothermal_spring"])
}

fn conductive_brine(t: &GeologicalTarget, _p: &CommodityProfile) -> f64 {
    observation_signal(t, &["gravity_low", "conductivity_high"])
}

fn brine_sample(t: &GeologicalTarget, _p: &CommodityProfile) -> f64 {
    observation_signal(t, &["li_brine_sample"])
}
