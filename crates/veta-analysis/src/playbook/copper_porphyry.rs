//! Copper porphyry playbook tables.

use veta_core::config::CommodityProfile;
use veta_core::types::{GeologicalTarget, MetamorphicGrade, WeatheringIntensity};

use super::predicates::{
    age_in_window, alteration_signal, not_assessed, observation_signal, tectonic_fit,
};
use super::types::{KillFactor, MandatoryCondition, SupportiveEvidence, SupportiveScore};
use crate::likelihood::chemical::SpectralScan;

/// Minimum tectonic fit for a magmatic arc.
const ARC_FIT: f64 = 0.5;

pub static MANDATORY: &[MandatoryCondition] = &[
    MandatoryCondition {
        name: "magmatic_arc_setting",
        description: "Subduction-related magmatic arc",
        check: magmatic_arc_setting,
    },
    MandatoryCondition {
        name: "permissive_age",
        description: "Age inside the porphyry preservation window",
        check: age_in_window,
    },
    MandatoryCondition {
        name: "intrusive_host",
        description: "Porphyritic intrusive or subvolcanic host",
        check: intrusive_host,
    },
];

pub static KILL_FACTORS: &[KillFactor] = &[
    KillFactor {
        name: "deeply_eroded",
        description: "Erosion removed the porphyry system",
        check: deeply_eroded,
    },
    KillFactor {
        name: "high_grade_metamorphism",
        description: "Metamorphism above greenschist overprinted the system",
        check: high_grade_metamorphism,
    },
    KillFactor {
        name: "complete_leaching",
        description: "Complete weathering leached the copper",
        check: complete_leaching,
    },
];

pub static SUPPORTIVE: &[SupportiveEvidence] = &[
    SupportiveEvidence {
        name: "arc_setting",
        description: "Tectonic setting fit",
        score: SupportiveScore::Context(tectonic_fit),
    },
    SupportiveEvidence {
        name: "alteration_zoning",
        description: "Porphyry alteration assemblage in spectra",
        score: SupportiveScore::Spectral(alteration_zoning),
    },
    SupportiveEvidence {
        name: "structural_intersection",
        description: "Fault intersections and ring fractures",
        score: SupportiveScore::Context(structural_intersection),
    },
    SupportiveEvidence {
        name: "geophysical_anomaly",
        description: "Magnetic or IP chargeability anomaly",
        score: SupportiveScore::Context(geophysical_anomaly),
    },
    SupportiveEvidence {
        name: "surface_geochemistry",
        description: "Cu-Mo soil anomaly or gossan",
        score: SupportiveScore::Context(surface_geochemistry),
    },
];

fn magmatic_arc_setting(t: &GeologicalTarget, p: &CommodityProfile) -> (bool, f64, String) {
    if t.tectonic_setting.trim().is_empty() {
        return not_assessed("tectonic_setting");
    }
    let fit = p.tectonic_score(&t.tectonic_setting);
    (
        fit >= ARC_FIT,
        1.0,
        format!("'{}' arc fit {fit:.2}", t.tectonic_setting),
    )
}

fn intrusive_host(t: &GeologicalTarget, p: &CommodityProfile) -> (bool, f64, String) {
    let Some(s) = &t.stratigraphy else {
        return not_assessed("stratigraphy");
    };
    let ok = p.is_compatible_facies(&s.facies);
    (ok, s.certainty, format!("host facies '{}'", s.facies))
}

fn deeply_eroded(t: &GeologicalTarget, p: &CommodityProfile) -> Option<String> {
    let s = t.preservation.as_ref()?;
    (s.erosion_depth_m > p.max_erosion_m)
        .then(|| format!("{} m eroded, limit {} m", s.erosion_depth_m, p.max_erosion_m))
}

fn high_grade_metamorphism(t: &GeologicalTarget, _p: &CommodityProfile) -> Option<String> {
    let s = t.preservation.as_ref()?;
    (s.metamorphic_grade > MetamorphicGrade::Greenschist)
        .then(|| format!("{} facies", s.metamorphic_grade))
}

fn complete_leaching(t: &GeologicalTarget, _p: &CommodityProfile) -> Option<String> {
    let s = t.preservation.as_ref()?;
    (s.weathering == WeatheringIntensity::Complete).then(|| "completely weathered profile".to_string())
}

fn alteration_zoning(scan: &SpectralScan) -> f64 {
    alteration_signal(scan)
}

fn structural_intersection(t: &GeologicalTarget, _p: &CommodityProfile) -> f64 {
    observation_signal(t, &["fault_intersection", "lineament", "ring_fracture"])
}

fn geophysical_anomaly(t: &GeologicalTarget, _p: &CommodityProfile) -> f64 {
    observation_signal(t, &["magnetic_high", "magnetic_low", "chargeability_high", "resistivity_low"])
}

fn surface_geochemistry(t: &GeologicalTarget, _p: &CommodityProfile) -> f64 {
    observation_signal(t, &["cu_soil_anomaly", "mo_soil_anomaly", "gossan"])
}
