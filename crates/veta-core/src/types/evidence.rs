//! Raw evidence payloads, as delivered by the ingestion collaborators.

use serde::{Deserialize, Serialize};

/// One absorption feature in a reflectance spectrum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionFeature {
    /// Feature centre in nanometres.
    pub wavelength_nm: f64,
    /// Relative band depth in [0.0, 1.0].
    pub depth: f64,
}

/// A spectral sample: the features extracted from one measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralSample {
    pub sample_id: String,
    pub features: Vec<AbsorptionFeature>,
}

/// Chemical (spectral) evidence for a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemicalEvidence {
    pub samples: Vec<SpectralSample>,
    /// Upstream data quality in [0.0, 1.0].
    pub data_quality: f64,
}

impl Default for ChemicalEvidence {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            data_quality: 0.8,
        }
    }
}

impl ChemicalEvidence {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A single field or remote-sensing observation for the rule-based
/// evidence services (structural, physical, surface).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldObservation {
    /// Observation kind, e.g. `"fault_intersection"` or `"magnetic_high"`.
    pub kind: String,
    /// Signal strength in [0.0, 1.0].
    pub strength: f64,
    /// Observer/instrument confidence in [0.0, 1.0].
    pub confidence: f64,
}

impl FieldObservation {
    pub fn new(kind: &str, strength: f64, confidence: f64) -> Self {
        Self {
            kind: kind.to_string(),
            strength,
            confidence,
        }
    }
}

/// The four evidence collections attached to a target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceCollections {
    pub chemical: ChemicalEvidence,
    pub structural: Vec<FieldObservation>,
    pub physical: Vec<FieldObservation>,
    /// Surface and seismic observations.
    pub surface: Vec<FieldObservation>,
}
