//! Condition checks. Each is a pure function of the target and the
//! commodity profile.
//!
//! A check that needs a context section the target lacks returns a
//! [`ValidationError`]; it never assumes a default.

use veta_core::config::CommodityProfile;
use veta_core::errors::ValidationError;
use veta_core::types::{parse_age, GeologicalTarget, Preservation, Stratigraphy, Structure};

use super::types::ConditionCheck;

pub type CheckResult = Result<ConditionCheck, ValidationError>;

/// Certainty of temporal checks when the age string had to fall back.
const FALLBACK_AGE_CERTAINTY: f64 = 0.3;

// Section accessors also reject a non-finite certainty; NaN would compare
// below every required confidence.

fn stratigraphy<'a>(t: &'a GeologicalTarget, condition: &str) -> Result<&'a Stratigraphy, ValidationError> {
    let s = t
        .stratigraphy
        .as_ref()
        .ok_or_else(|| ValidationError::missing("stratigraphy", condition))?;
    finite(s.certainty, "stratigraphy.certainty")?;
    Ok(s)
}

fn structure<'a>(t: &'a GeologicalTarget, condition: &str) -> Result<&'a Structure, ValidationError> {
    let s = t
        .structure
        .as_ref()
        .ok_or_else(|| ValidationError::missing("structure", condition))?;
    finite(s.certainty, "structure.certainty")?;
    Ok(s)
}

fn preservation<'a>(t: &'a GeologicalTarget, condition: &str) -> Result<&'a Preservation, ValidationError> {
    let p = t
        .preservation
        .as_ref()
        .ok_or_else(|| ValidationError::missing("preservation", condition))?;
    finite(p.certainty, "preservation.certainty")?;
    Ok(p)
}

fn finite(value: f64, field: &str) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::invalid(field, "must be a finite number"))
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Parsed target age and the certainty a temporal check may claim.
fn target_age(t: &GeologicalTarget) -> (f64, f64) {
    let parsed = parse_age(&t.age);
    let certainty = if parsed.fallback { FALLBACK_AGE_CERTAINTY } else { 1.0 };
    (parsed.value_ma, certainty)
}

// ---- Stratigraphic ----

pub fn no_reservoir_unit(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    if !p.requires_reservoir {
        return Ok(ConditionCheck::not_applicable(format!("{} needs no reservoir unit", p.commodity)));
    }
    let s = stratigraphy(t, "no_reservoir_unit")?;
    Ok(if is_blank(&s.reservoir_unit) {
        ConditionCheck::fail(s.certainty, "no reservoir unit identified")
    } else {
        ConditionCheck::pass(s.certainty, "reservoir unit present")
    })
}

pub fn no_seal_unit(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    if !p.requires_seal {
        return Ok(ConditionCheck::not_applicable(format!("{} needs no seal", p.commodity)));
    }
    let s = stratigraphy(t, "no_seal_unit")?;
    Ok(if is_blank(&s.seal_unit) {
        ConditionCheck::fail(s.certainty, "no seal unit above the reservoir")
    } else {
        ConditionCheck::pass(s.certainty, "seal unit present")
    })
}

pub fn incompatible_facies(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    let s = stratigraphy(t, "incompatible_facies")?;
    if s.facies.trim().is_empty() {
        return Err(ValidationError::empty("stratigraphy.facies", "incompatible_facies"));
    }
    Ok(if p.is_compatible_facies(&s.facies) {
        ConditionCheck::pass(s.certainty, format!("facies '{}' is compatible", s.facies))
    } else {
        ConditionCheck::fail(
            s.certainty,
            format!("facies '{}' cannot host a {} system", s.facies, p.commodity),
        )
    })
}

pub fn insufficient_thickness(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    let Some(min) = p.min_reservoir_thickness_m else {
        return Ok(ConditionCheck::not_applicable("no thickness requirement"));
    };
    let s = stratigraphy(t, "insufficient_thickness")?;
    let thickness = s
        .reservoir_thickness_m
        .ok_or_else(|| ValidationError::missing("stratigraphy.reservoir_thickness_m", "insufficient_thickness"))?;
    let thickness = finite(thickness, "stratigraphy.reservoir_thickness_m")?;
    Ok(if thickness < min {
        ConditionCheck::fail(s.certainty, format!("reservoir {thickness} m thick, minimum {min} m"))
    } else {
        ConditionCheck::pass(s.certainty, format!("reservoir {thickness} m thick"))
    })
}

// ---- Temporal ----

pub fn age_outside_window(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    let (age, certainty) = target_age(t);
    let (lo, hi) = p.age_window_ma;
    Ok(if age < lo || age > hi {
        ConditionCheck::fail(certainty, format!("age {age} Ma outside {lo}-{hi} Ma window"))
    } else {
        ConditionCheck::pass(certainty, format!("age {age} Ma inside {lo}-{hi} Ma window"))
    })
}

/// A trap younger than the charge (smaller Ma) formed after the fluids
/// migrated through.
pub fn trap_postdates_charge(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    if !p.requires_charge_timing {
        return Ok(ConditionCheck::not_applicable("no trap/charge timing requirement"));
    }
    let s = structure(t, "trap_postdates_charge")?;
    let trap = s
        .trap_age_ma
        .ok_or_else(|| ValidationError::missing("structure.trap_age_ma", "trap_postdates_charge"))?;
    let charge = s
        .charge_age_ma
        .ok_or_else(|| ValidationError::missing("structure.charge_age_ma", "trap_postdates_charge"))?;
    let trap = finite(trap, "structure.trap_age_ma")?;
    let charge = finite(charge, "structure.charge_age_ma")?;
    Ok(if trap < charge {
        ConditionCheck::fail(s.certainty, format!("trap ({trap} Ma) formed after charge ({charge} Ma)"))
    } else {
        ConditionCheck::pass(s.certainty, format!("trap ({trap} Ma) predates charge ({charge} Ma)"))
    })
}

pub fn basin_too_young(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    let Some(min) = p.min_basin_age_ma else {
        return Ok(ConditionCheck::not_applicable("no basin maturity requirement"));
    };
    let (age, certainty) = target_age(t);
    Ok(if age < min {
        ConditionCheck::fail(certainty, format!("basin {age} Ma, needs at least {min} Ma to mature"))
    } else {
        ConditionCheck::pass(certainty, format!("basin {age} Ma is mature"))
    })
}

// ---- Structural ----

pub fn no_trap_structure(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    if !p.requires_trap {
        return Ok(ConditionCheck::not_applicable(format!("{} needs no trap", p.commodity)));
    }
    let s = structure(t, "no_trap_structure")?;
    Ok(if is_blank(&s.trap_type) {
        ConditionCheck::fail(s.certainty, "no trap structure mapped")
    } else {
        ConditionCheck::pass(s.certainty, "trap structure present")
    })
}

pub fn insufficient_closure(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    let Some(min) = p.min_closure_km2 else {
        return Ok(ConditionCheck::not_applicable("no closure requirement"));
    };
    let s = structure(t, "insufficient_closure")?;
    let closure = s
        .closure_area_km2
        .ok_or_else(|| ValidationError::missing("structure.closure_area_km2", "insufficient_closure"))?;
    let closure = finite(closure, "structure.closure_area_km2")?;
    Ok(if closure < min {
        ConditionCheck::fail(s.certainty, format!("closure {closure} km², minimum {min} km²"))
    } else {
        ConditionCheck::pass(s.certainty, format!("closure {closure} km²"))
    })
}

pub fn basin_unsealed(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    if !p.requires_closed_basin {
        return Ok(ConditionCheck::not_applicable(format!("{} needs no closed basin", p.commodity)));
    }
    let s = structure(t, "basin_unsealed")?;
    Ok(if s.basin_sealed {
        ConditionCheck::pass(s.certainty, "basin is closed")
    } else {
        ConditionCheck::fail(s.certainty, "basin is open, fluids escape")
    })
}

pub fn breached_by_fault(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    if !p.requires_sealing_faults {
        return Ok(ConditionCheck::not_applicable("fault seal irrelevant"));
    }
    let s = structure(t, "breached_by_fault")?;
    Ok(if s.fault_seal_intact {
        ConditionCheck::pass(s.certainty, "bounding faults seal")
    } else {
        ConditionCheck::fail(s.certainty, "trap breached by a leaking fault")
    })
}

// ---- Preservation ----

pub fn excessive_uplift(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    let s = preservation(t, "excessive_uplift")?;
    let uplift = finite(s.uplift_m, "preservation.uplift_m")?;
    Ok(if uplift > p.max_uplift_m {
        ConditionCheck::fail(s.certainty, format!("uplift {uplift} m exceeds {} m", p.max_uplift_m))
    } else {
        ConditionCheck::pass(s.certainty, format!("uplift {uplift} m tolerated"))
    })
}

pub fn deep_erosion(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    let s = preservation(t, "deep_erosion")?;
    let erosion = finite(s.erosion_depth_m, "preservation.erosion_depth_m")?;
    Ok(if erosion > p.max_erosion_m {
        ConditionCheck::fail(
            s.certainty,
            format!("erosion {erosion} m exceeds {} m, system removed", p.max_erosion_m),
        )
    } else {
        ConditionCheck::pass(s.certainty, format!("erosion {erosion} m tolerated"))
    })
}

pub fn high_metamorphic_grade(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    let s = preservation(t, "high_metamorphic_grade")?;
    Ok(if s.metamorphic_grade > p.max_metamorphic_grade {
        ConditionCheck::fail(
            s.certainty,
            format!(
                "{} facies metamorphism exceeds {}",
                s.metamorphic_grade, p.max_metamorphic_grade
            ),
        )
    } else {
        ConditionCheck::pass(s.certainty, format!("{} metamorphism tolerated", s.metamorphic_grade))
    })
}

pub fn intense_weathering(t: &GeologicalTarget, p: &CommodityProfile) -> CheckResult {
    let s = preservation(t, "intense_weathering")?;
    Ok(if s.weathering > p.max_weathering {
        ConditionCheck::fail(
            s.certainty,
            format!("{} weathering exceeds {}", s.weathering, p.max_weathering),
        )
    } else {
        ConditionCheck::pass(s.certainty, format!("{} weathering tolerated", s.weathering))
    })
}
