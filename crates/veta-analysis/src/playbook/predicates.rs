//! Building blocks shared by the playbook tables.

use veta_core::config::CommodityProfile;
use veta_core::types::{parse_age, GeologicalTarget};

use crate::likelihood::chemical::SpectralScan;

/// Certainty claimed for an age-based predicate when the age fell back.
const FALLBACK_AGE_CERTAINTY: f64 = 0.3;

/// Mandatory result for a predicate whose data section is absent. Missing
/// data cannot demonstrate a mandatory condition.
pub fn not_assessed(section: &str) -> (bool, f64, String) {
    (false, 0.0, format!("not assessed: {section} missing"))
}

/// Strongest `strength × confidence` among observations of the given kinds,
/// across the structural, physical and surface collections.
pub fn observation_signal(target: &GeologicalTarget, kinds: &[&str]) -> f64 {
    let ev = &target.evidence;
    ev.structural
        .iter()
        .chain(&ev.physical)
        .chain(&ev.surface)
        .filter(|o| kinds.contains(&o.kind.as_str()))
        .map(|o| o.strength.clamp(0.0, 1.0) * o.confidence.clamp(0.0, 1.0))
        .fold(0.0, f64::max)
}

/// Score of the best-developed alteration assemblage.
pub fn alteration_signal(scan: &SpectralScan) -> f64 {
    scan.assemblages()
        .first()
        .map_or(0.0, |a| a.score.clamp(0.0, 1.0))
}

pub fn tectonic_fit(target: &GeologicalTarget, profile: &CommodityProfile) -> f64 {
    if target.tectonic_setting.trim().is_empty() {
        return 0.0;
    }
    profile.tectonic_score(&target.tectonic_setting)
}

pub fn age_in_window(target: &GeologicalTarget, profile: &CommodityProfile) -> (bool, f64, String) {
    let parsed = parse_age(&target.age);
    let certainty = if parsed.fallback { FALLBACK_AGE_CERTAINTY } else { 1.0 };
    let (lo, hi) = profile.age_window_ma;
    let inside = (lo..=hi).contains(&parsed.value_ma);
    let detail = format!(
        "{} Ma {} {lo}-{hi} Ma window{}",
        parsed.value_ma,
        if inside { "inside" } else { "outside" },
        if parsed.fallback { " (age unparsed, assumed)" } else { "" }
    );
    (inside, certainty, detail)
}

/// Linear ramp from 0.0 at `zero` to 1.0 at `full`.
pub fn ramp(value: f64, zero: f64, full: f64) -> f64 {
    if full <= zero {
        return if value >= full { 1.0 } else { 0.0 };
    }
    ((value - zero) / (full - zero)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veta_core::types::{Commodity, FieldObservation};

    #[test]
    fn observation_signal_takes_max_across_collections() {
        let mut t = GeologicalTarget::new("t", Commodity::CopperPorphyry);
        t.evidence.structural.push(FieldObservation::new("lineament", 0.5, 0.5));
        t.evidence.surface.push(FieldObservation::new("lineament", 0.9, 1.0));
        t.evidence.physical.push(FieldObservation::new("magnetic_high", 1.0, 1.0));
        assert_eq!(observation_signal(&t, &["lineament"]), 0.9);
        assert_eq!(observation_signal(&t, &["gossan"]), 0.0);
    }

    #[test]
    fn ramp_clamps() {
        assert_eq!(ramp(5.0, 0.0, 10.0), 0.5);
        assert_eq!(ramp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(ramp(50.0, 0.0, 10.0), 1.0);
    }
}
