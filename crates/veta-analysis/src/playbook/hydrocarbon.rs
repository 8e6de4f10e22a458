//! Hydrocarbon playbook tables, shared by the onshore and offshore
//! variants. Thresholds come from the commodity profile, so the two
//! variants differ only in their profile data.

use veta_core::config::CommodityProfile;
use veta_core::types::GeologicalTarget;

use super::predicates::{not_assessed, observation_signal, ramp, tectonic_fit};
use super::types::{KillFactor, MandatoryCondition, SupportiveEvidence, SupportiveScore};

pub static MANDATORY: &[MandatoryCondition] = &[
    MandatoryCondition {
        name: "reservoir_present",
        description: "Porous reservoir unit",
        check: reservoir_present,
    },
    MandatoryCondition {
        name: "seal_present",
        description: "Top seal over the reservoir",
        check: seal_present,
    },
    MandatoryCondition {
        name: "trap_present",
        description: "Structural or stratigraphic trap",
        check: trap_present,
    },
    MandatoryCondition {
        name: "charge_timing",
        description: "Trap formed before hydrocarbon charge",
        check: charge_timing,
    },
];

pub static KILL_FACTORS: &[KillFactor] = &[
    KillFactor {
        name: "breached_seal",
        description: "Faults breach the top seal",
        check: breached_seal,
    },
    KillFactor {
        name: "overmature",
        description: "Burial metamorphism cooked the hydrocarbons",
        check: overmature,
    },
    KillFactor {
        name: "excessive_uplift",
        description: "Uplift spilled the trap",
        check: excessive_uplift,
    },
    KillFactor {
        name: "dry_hole",
        description: "Dry well drilled on the same closure",
        check: dry_hole,
    },
];

pub static SUPPORTIVE: &[SupportiveEvidence] = &[
    SupportiveEvidence {
        name: "basin_setting",
        description: "Productive basin type",
        score: SupportiveScore::Context(tectonic_fit),
    },
    SupportiveEvidence {
        name: "structural_closure",
        description: "Anticline, fault closure or salt dome",
        score: SupportiveScore::Context(structural_closure),
    },
    SupportiveEvidence {
        name: "closure_size",
        description: "Closure area relative to the economic minimum",
        score: SupportiveScore::Context(closure_size),
    },
    SupportiveEvidence {
        name: "reservoir_thickness",
        description: "Net reservoir thickness",
        score: SupportiveScore::Context(reservoir_thickness),
    },
    SupportiveEvidence {
        name: "direct_indicators",
        description: "Seismic bright or flat spots",
        score: SupportiveScore::Context(direct_indicators),
    },
    SupportiveEvidence {
        name: "surface_seeps",
        description: "Oil or gas seeps",
        score: SupportiveScore::Context(surface_seeps),
    },
];

fn named_unit(unit: &Option<String>) -> Option<&str> {
    unit.as_deref().map(str::trim).filter(|u| !u.is_empty())
}

fn reservoir_present(t: &GeologicalTarget, _p: &CommodityProfile) -> (bool, f64, String) {
    let Some(s) = &t.stratigraphy else {
        return not_assessed("stratigraphy");
    };
    match named_unit(&s.reservoir_unit) {
        Some(unit) => (true, s.certainty, format!("reservoir '{unit}'")),
        None => (false, s.certainty, "no reservoir unit".to_string()),
    }
}

fn seal_present(t: &GeologicalTarget, _p: &CommodityProfile) -> (bool, f64, String) {
    let Some(s) = &t.stratigraphy else {
        return not_assessed("stratigraphy");
    };
    match named_unit(&s.seal_unit) {
        Some(unit) => (true, s.certainty, format!("seal '{unit}'")),
        None => (false, s.certainty, "no seal unit".to_string()),
    }
}

fn trap_present(t: &GeologicalTarget, _p: &CommodityProfile) -> (bool, f64, String) {
    let Some(s) = &t.structure else {
        return not_assessed("structure");
    };
    match named_unit(&s.trap_type) {
        Some(trap) => (true, s.certainty, format!("{trap} trap")),
        None => (false, s.certainty, "no trap mapped".to_string()),
    }
}

fn charge_timing(t: &GeologicalTarget, _p: &CommodityProfile) -> (bool, f64, String) {
    let Some(s) = &t.structure else {
        return not_assessed("structure");
    };
    match (s.trap_age_ma, s.charge_age_ma) {
        (Some(trap), Some(charge)) => (
            trap >= charge,
            s.certainty,
            format!("trap {trap} Ma, charge {charge} Ma"),
        ),
        _ => not_assessed("structure.trap_age_ma/charge_age_ma"),
    }
}

fn breached_seal(t: &GeologicalTarget, _p: &CommodityProfile) -> Option<String> {
    let s = t.structure.as_ref()?;
    (!s.fault_seal_intact).then(|| "bounding faults leak".to_string())
}

fn overmature(t: &GeologicalTarget, p: &CommodityProfile) -> Option<String> {
    let s = t.preservation.as_ref()?;
    (s.metamorphic_grade > p.max_metamorphic_grade)
        .then(|| format!("{} facies burial", s.metamorphic_grade))
}

fn excessive_uplift(t: &GeologicalTarget, p: &CommodityProfile) -> Option<String> {
    let s = t.preservation.as_ref()?;
    (s.uplift_m > p.max_uplift_m).then(|| format!("{} m uplift, limit {} m", s.uplift_m, p.max_uplift_m))
}

fn dry_hole(t: &GeologicalTarget, _p: &CommodityProfile) -> Option<String> {
    let signal = observation_signal(t, &["dry_hole"]);
    (signal > 0.5).then(|| format!("dry hole on closure (signal {signal:.2})"))
}

fn structural_closure(t: &GeologicalTarget, _p: &CommodityProfile) -> f64 {
    observation_signal(t, &["anticline", "fault_closure", "salt_dome"])
}

/// Full strength at ten times the minimum closure.
fn closure_size(t: &GeologicalTarget, p: &CommodityProfile) -> f64 {
    let (Some(s), Some(min)) = (&t.structure, p.min_closure_km2) else {
        return 0.0;
    };
    s.closure_area_km2.map_or(0.0, |area| ramp(area, min, min * 10.0))
}

/// Full strength at ten times the minimum thickness.
fn reservoir_thickness(t: &GeologicalTarget, p: &CommodityProfile) -> f64 {
    let (Some(s), Some(min)) = (&t.stratigraphy, p.min_reservoir_thickness_m) else {
        return 0.0;
    };
    s.reservoir_thickness_m.map_or(0.0, |h| ramp(h, min, min * 10.0))
}

fn direct_indicators(t: &GeologicalTarget, _p: &CommodityProfile) -> f64 {
    observation_signal(t, &["bright_spot", "flat_spot"])
}

fn surface_seeps(t: &GeologicalTarget, _p: &CommodityProfile) -> f64 {
    observation_signal(t, &["oil_seep", "gas_seep"])
}
