//! Shared fixtures for veta-analysis integration tests.
#![allow(dead_code)]

use veta_analysis::prior::RegionalContext;
use veta_core::types::{
    AbsorptionFeature, ChemicalEvidence, Commodity, FieldObservation, GeologicalTarget,
    MetamorphicGrade, Preservation, SpectralSample, Stratigraphy, Structure, WeatheringIntensity,
};

pub fn sample(id: &str, bands: &[(f64, f64)]) -> SpectralSample {
    SpectralSample {
        sample_id: id.to_string(),
        features: bands
            .iter()
            .map(|&(wavelength_nm, depth)| AbsorptionFeature { wavelength_nm, depth })
            .collect(),
    }
}

pub fn preserved(certainty: f64) -> Preservation {
    Preservation {
        uplift_m: 2000.0,
        erosion_depth_m: 1500.0,
        metamorphic_grade: MetamorphicGrade::Greenschist,
        weathering: WeatheringIntensity::Moderate,
        certainty,
    }
}

/// A well-constrained porphyry target with strong evidence on every line.
pub fn copper_target() -> GeologicalTarget {
    let mut t = GeologicalTarget::new("cu-001", Commodity::CopperPorphyry);
    t.tectonic_setting = "continental_arc".to_string();
    t.age = "45 Ma".to_string();
    t.stratigraphy = Some(Stratigraphy {
        facies: "porphyritic_intrusive".to_string(),
        certainty: 0.9,
        ..Stratigraphy::default()
    });
    t.preservation = Some(preserved(0.9));
    t.evidence.chemical = ChemicalEvidence {
        samples: vec![sample("s1", &[(1408.0, 0.6), (2200.0, 0.6), (2350.0, 0.6)])],
        data_quality: 0.9,
    };
    t.evidence.structural = vec![FieldObservation::new("fault_intersection", 0.9, 0.9)];
    t.evidence.physical = vec![FieldObservation::new("chargeability_high", 0.9, 0.9)];
    t.evidence.surface = vec![FieldObservation::new("cu_soil_anomaly", 0.85, 0.9)];
    t
}

pub fn copper_context() -> RegionalContext {
    RegionalContext::new("continental_arc", "45 Ma")
        .with_lithologies(&["granodiorite", "andesite"])
        .with_analogs(3, 10_000.0)
}

/// A complete onshore hydrocarbon play.
pub fn hydrocarbon_target(commodity: Commodity) -> GeologicalTarget {
    let mut t = GeologicalTarget::new("hc-001", commodity);
    t.tectonic_setting = "foreland_basin".to_string();
    t.age = "120 Ma".to_string();
    t.stratigraphy = Some(Stratigraphy {
        reservoir_unit: Some("Upper Sandstone".to_string()),
        seal_unit: Some("Marine Shale".to_string()),
        facies: "deltaic".to_string(),
        reservoir_thickness_m: Some(40.0),
        certainty: 0.95,
    });
    t.structure = Some(Structure {
        trap_type: Some("anticline".to_string()),
        closure_area_km2: Some(12.0),
        fault_seal_intact: true,
        basin_sealed: true,
        trap_age_ma: Some(90.0),
        charge_age_ma: Some(60.0),
        certainty: 0.9,
    });
    t.preservation = Some(Preservation {
        uplift_m: 800.0,
        erosion_depth_m: 300.0,
        metamorphic_grade: MetamorphicGrade::None,
        weathering: WeatheringIntensity::Slight,
        certainty: 0.9,
    });
    t.evidence.structural = vec![FieldObservation::new("anticline", 0.9, 0.95)];
    t.evidence.surface = vec![FieldObservation::new("bright_spot", 0.8, 0.9)];
    t
}

/// A hydrocarbon target with no reservoir unit and an unsealed basin.
pub fn unsealed_no_reservoir() -> GeologicalTarget {
    let mut t = hydrocarbon_target(Commodity::HydrocarbonOnshore);
    if let Some(s) = t.stratigraphy.as_mut() {
        s.reservoir_unit = None;
    }
    if let Some(s) = t.structure.as_mut() {
        s.basin_sealed = false;
    }
    t
}

pub fn lithium_target() -> GeologicalTarget {
    let mut t = GeologicalTarget::new("li-001", Commodity::LithiumBrine);
    t.tectonic_setting = "intermontane_basin".to_string();
    t.age = "3 Ma".to_string();
    t.stratigraphy = Some(Stratigraphy {
        reservoir_unit: Some("Salar aquifer".to_string()),
        facies: "salar".to_string(),
        reservoir_thickness_m: Some(60.0),
        ..Stratigraphy::default()
    });
    t.structure = Some(Structure {
        basin_sealed: true,
        certainty: 1.0,
        ..Structure::default()
    });
    t.preservation = Some(Preservation {
        uplift_m: 100.0,
        erosion_depth_m: 20.0,
        certainty: 1.0,
        ..Preservation::default()
    });
    t.evidence.surface = vec![
        FieldObservation::new("salar_crust", 0.9, 0.9),
        FieldObservation::new("li_brine_sample", 0.9, 0.95),
    ];
    t.evidence.physical = vec![FieldObservation::new("conductivity_high", 0.8, 0.9)];
    t
}
