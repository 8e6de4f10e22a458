//! Chemical likelihood service.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use veta_core::config::{ChemicalConfig, DetectionTerms, ProfileSet};
use veta_core::errors::{AnalysisResult, ValidationError};
use veta_core::types::{EvidenceType, GeologicalTarget, LikelihoodDistribution};

use super::alteration::AlterationScore;
use super::scan::SpectralScan;
use super::unmixing::{LibraryUnmixer, MineralDetection, SpectralUnmixer, UnmixingResult};
use crate::likelihood::types::EvidenceLikelihood;

/// Components of the chemical uncertainty, combined root-sum-square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertaintyBreakdown {
    pub mineral: f64,
    pub unmixing: f64,
    pub data_quality: f64,
    pub combined: f64,
}

/// Full chemical scoring detail. `likelihood` is what fusion consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChemicalAssessment {
    pub likelihood: LikelihoodDistribution,
    /// Diagnostic detections that entered the likelihood product.
    pub detections: Vec<MineralDetection>,
    /// Scored over every detection above the threshold, diagnostic or not.
    pub assemblages: Vec<AlterationScore>,
    /// Distinct diagnostic minerals detected / expected.
    pub coverage: f64,
    pub uncertainty: UncertaintyBreakdown,
}

#[derive(Clone)]
pub struct ChemicalLikelihood {
    config: ChemicalConfig,
    profiles: ProfileSet,
    unmixer: Arc<dyn SpectralUnmixer>,
}

impl ChemicalLikelihood {
    pub fn new(config: ChemicalConfig, profiles: ProfileSet) -> Self {
        Self {
            config,
            profiles,
            unmixer: Arc::new(LibraryUnmixer::default()),
        }
    }

    /// Swap in a different unmixing implementation.
    pub fn with_unmixer(mut self, unmixer: Arc<dyn SpectralUnmixer>) -> Self {
        self.unmixer = unmixer;
        self
    }

    pub fn assess(&self, target: &GeologicalTarget) -> AnalysisResult<ChemicalAssessment> {
        let evidence = &target.evidence.chemical;
        if !evidence.data_quality.is_finite() {
            return Err(ValidationError::invalid(
                "evidence.chemical.data_quality",
                "must be a finite number",
            )
            .into());
        }
        let profile = self.profiles.get(target.commodity);

        let scan = self.scan(target);
        let diagnostic: Vec<MineralDetection> = scan
            .detections
            .iter()
            .filter(|d| profile.diagnostic_minerals.iter().any(|m| *m == d.mineral))
            .cloned()
            .collect();

        let coverage = {
            let distinct: FxHashSet<&str> = diagnostic.iter().map(|d| d.mineral.as_str()).collect();
            distinct.len() as f64 / profile.diagnostic_minerals.len().max(1) as f64
        };

        let detections = match self.config.product_terms {
            DetectionTerms::AllDetections => diagnostic,
            DetectionTerms::StrongestPerMineral => strongest_per_mineral(diagnostic),
        };

        let mean = if detections.is_empty() {
            self.config.no_detection_likelihood
        } else {
            let product: f64 = detections
                .iter()
                .map(|d| (d.abundance * d.confidence).max(self.config.term_floor))
                .product();
            (product * (1.0 + coverage)).min(self.config.likelihood_cap)
        };

        let uncertainty = self.uncertainty(&detections, &scan.unmixed, evidence.data_quality);
        let likelihood = LikelihoodDistribution::new(
            EvidenceType::Chemical,
            mean,
            uncertainty.combined * uncertainty.combined,
        );

        let assemblages = scan.assemblages();
        tracing::debug!(
            target_id = %target.id,
            samples = evidence.samples.len(),
            detections = detections.len(),
            assemblages = assemblages.len(),
            mean,
            sigma = uncertainty.combined,
            "chemical likelihood computed"
        );

        Ok(ChemicalAssessment {
            likelihood,
            detections,
            assemblages,
            coverage,
            uncertainty,
        })
    }

    /// Unmix every sample with this service's unmixer and threshold.
    pub fn scan(&self, target: &GeologicalTarget) -> SpectralScan {
        SpectralScan::run(
            self.unmixer.as_ref(),
            &target.evidence.chemical.samples,
            self.config.detection_threshold,
        )
    }

    fn uncertainty(
        &self,
        detections: &[MineralDetection],
        unmixed: &[UnmixingResult],
        data_quality: f64,
    ) -> UncertaintyBreakdown {
        let mineral = if detections.is_empty() {
            1.0
        } else {
            1.0 - detections.iter().map(|d| d.confidence).sum::<f64>() / detections.len() as f64
        };

        let fitted: Vec<f64> = unmixed.iter().filter(|r| r.fitted).map(|r| r.uncertainty).collect();
        let unmixing = if fitted.is_empty() {
            self.config.unfit_unmixing_uncertainty
        } else {
            fitted.iter().sum::<f64>() / fitted.len() as f64
        };

        let data_quality = 1.0 - data_quality.clamp(0.0, 1.0);
        let combined = (mineral.powi(2) + unmixing.powi(2) + data_quality.powi(2)).sqrt();
        UncertaintyBreakdown {
            mineral,
            unmixing,
            data_quality,
            combined,
        }
    }
}

/// Most abundant detection per mineral, ordered by mineral name.
fn strongest_per_mineral(detections: Vec<MineralDetection>) -> Vec<MineralDetection> {
    let mut strongest: FxHashMap<String, MineralDetection> = FxHashMap::default();
    for detection in detections {
        match strongest.get(&detection.mineral) {
            Some(best) if best.abundance >= detection.abundance => {}
            _ => {
                strongest.insert(detection.mineral.clone(), detection);
            }
        }
    }
    let mut kept: Vec<MineralDetection> = strongest.into_values().collect();
    kept.sort_by(|a, b| a.mineral.cmp(&b.mineral));
    kept
}

impl EvidenceLikelihood for ChemicalLikelihood {
    fn evidence_type(&self) -> EvidenceType {
        EvidenceType::Chemical
    }

    fn compute(&self, target: &GeologicalTarget) -> AnalysisResult<LikelihoodDistribution> {
        self.assess(target).map(|a| a.likelihood)
    }
}
