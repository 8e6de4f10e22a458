//! One unmixing pass over a target's spectral samples, shared by the
//! chemical likelihood and the playbook's spectral predicates.

use veta_core::types::SpectralSample;

use super::alteration::{identify_assemblages, AlterationScore};
use super::unmixing::{MineralDetection, SpectralUnmixer, UnmixingResult};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpectralScan {
    /// Raw unmixing output, one entry per sample.
    pub unmixed: Vec<UnmixingResult>,
    /// Detections above the abundance threshold, in sample order.
    pub detections: Vec<MineralDetection>,
}

impl SpectralScan {
    pub fn run(unmixer: &dyn SpectralUnmixer, samples: &[SpectralSample], threshold: f64) -> Self {
        let unmixed: Vec<UnmixingResult> = samples.iter().map(|s| unmixer.unmix(s)).collect();
        let detections = unmixed
            .iter()
            .flat_map(|r| r.detections.iter())
            .filter(|d| d.abundance > threshold)
            .cloned()
            .collect();
        Self { unmixed, detections }
    }

    /// Strongest `abundance × confidence` among detections of the given minerals.
    pub fn signal(&self, minerals: &[&str]) -> f64 {
        self.detections
            .iter()
            .filter(|d| minerals.contains(&d.mineral.as_str()))
            .map(|d| d.abundance * d.confidence)
            .fold(0.0, f64::max)
    }

    /// Alteration assemblages over every detection, diagnostic or not.
    pub fn assemblages(&self) -> Vec<AlterationScore> {
        identify_assemblages(&self.detections)
    }
}
