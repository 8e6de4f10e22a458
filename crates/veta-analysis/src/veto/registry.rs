//! Compile-time veto registry: 15 condition records in evaluation order.

use veta_core::config::CommodityProfile;
use veta_core::types::GeologicalTarget;

use super::conditions::{self, CheckResult};
use super::types::{Severity, VetoCategory};

pub type CheckFn = fn(&GeologicalTarget, &CommodityProfile) -> CheckResult;

/// One veto condition.
#[derive(Debug, Clone, Copy)]
pub struct ConditionRecord {
    pub name: &'static str,
    pub category: VetoCategory,
    pub severity: Severity,
    /// A negative check blocks only at or above this certainty.
    pub required_confidence: f64,
    pub description: &'static str,
    pub check: CheckFn,
}

const CRITICAL_CONFIDENCE: f64 = 0.6;
const MAJOR_CONFIDENCE: f64 = 0.8;

const fn record(
    name: &'static str,
    category: VetoCategory,
    severity: Severity,
    description: &'static str,
    check: CheckFn,
) -> ConditionRecord {
    let required_confidence = match severity {
        Severity::Critical => CRITICAL_CONFIDENCE,
        Severity::Major => MAJOR_CONFIDENCE,
    };
    ConditionRecord {
        name,
        category,
        severity,
        required_confidence,
        description,
        check,
    }
}

use Severity::{Critical, Major};
use VetoCategory::{Preservation, Stratigraphic, Structural, Temporal};

/// All conditions, grouped by category, in evaluation order.
pub static CONDITIONS: [ConditionRecord; 15] = [
    record("no_reservoir_unit", Stratigraphic, Critical, "No reservoir unit to host the deposit", conditions::no_reservoir_unit),
    record("no_seal_unit", Stratigraphic, Critical, "No seal to retain fluids", conditions::no_seal_unit),
    record("incompatible_facies", Stratigraphic, Major, "Depositional facies cannot host the system", conditions::incompatible_facies),
    record("insufficient_thickness", Stratigraphic, Major, "Reservoir too thin", conditions::insufficient_thickness),
    record("age_outside_window", Temporal, Critical, "Target age outside the deposit model's window", conditions::age_outside_window),
    record("trap_postdates_charge", Temporal, Major, "Trap formed after fluid charge", conditions::trap_postdates_charge),
    record("basin_too_young", Temporal, Major, "Basin too young for the system to mature", conditions::basin_too_young),
    record("no_trap_structure", Structural, Critical, "No trap structure", conditions::no_trap_structure),
    record("insufficient_closure", Structural, Major, "Structural closure too small", conditions::insufficient_closure),
    record("basin_unsealed", Structural, Critical, "Basin open to fluid escape", conditions::basin_unsealed),
    record("breached_by_fault", Structural, Major, "Trap breached by a leaking fault", conditions::breached_by_fault),
    record("excessive_uplift", Preservation, Major, "Uplift beyond preservation limit", conditions::excessive_uplift),
    record("deep_erosion", Preservation, Major, "Erosion removed the system", conditions::deep_erosion),
    record("high_metamorphic_grade", Preservation, Critical, "Metamorphism destroyed the system", conditions::high_metamorphic_grade),
    record("intense_weathering", Preservation, Major, "Weathering destroyed the system", conditions::intense_weathering),
];

/// Every condition in evaluation order.
pub fn conditions() -> &'static [ConditionRecord] {
    &CONDITIONS
}

/// Look up a condition by name.
pub fn condition(name: &str) -> Option<&'static ConditionRecord> {
    CONDITIONS.iter().find(|c| c.name == name)
}

/// The conditions of one category, in evaluation order.
pub fn category_conditions(category: VetoCategory) -> impl Iterator<Item = &'static ConditionRecord> {
    CONDITIONS.iter().filter(move |c| c.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veta_core::constants::{VETO_CATEGORY_COUNT, VETO_CONDITION_COUNT};

    #[test]
    fn taxonomy_shape() {
        assert_eq!(conditions().len(), VETO_CONDITION_COUNT);
        assert_eq!(VetoCategory::ALL.len(), VETO_CATEGORY_COUNT);
        let per_category: Vec<usize> = VetoCategory::ALL
            .iter()
            .map(|&c| category_conditions(c).count())
            .collect();
        assert_eq!(per_category, vec![4, 3, 4, 4]);
    }

    #[test]
    fn records_are_grouped_in_category_order() {
        let categories: Vec<VetoCategory> = conditions().iter().map(|c| c.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = conditions().iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), VETO_CONDITION_COUNT);
    }
}
