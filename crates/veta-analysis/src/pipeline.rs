//! End-to-end analysis of one target.
//!
//! Prior, likelihoods, veto and playbook have no data dependency on each
//! other and run concurrently on the rayon pool. Fusion joins them;
//! collapse detection runs only on a non-vetoed posterior.

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use veta_core::config::VetaConfig;
use veta_core::errors::AnalysisResult;
use veta_core::types::{Commodity, GeologicalTarget, LikelihoodDistribution, PosteriorDistribution, PriorDistribution};

use crate::collapse::{CollapseDetector, CollapseResult, PatternAssessment};
use crate::fusion::FusionEngine;
use crate::likelihood::chemical::SpectralUnmixer;
use crate::likelihood::LikelihoodSuite;
use crate::playbook::{PlaybookEngine, PlaybookResult};
use crate::prior::{PriorEngine, RegionalContext};
use crate::veto::{VetoEngine, VetoResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub target: GeologicalTarget,
    pub context: RegionalContext,
}

impl AnalysisRequest {
    pub fn new(target: GeologicalTarget, context: RegionalContext) -> Self {
        Self { target, context }
    }
}

/// Everything computed for one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub target_id: String,
    pub commodity: Commodity,
    pub prior: PriorDistribution,
    pub likelihoods: Vec<LikelihoodDistribution>,
    pub veto: VetoResult,
    pub playbook: PlaybookResult,
    pub posterior: PosteriorDistribution,
    /// Absent when the veto failed.
    pub collapse: Option<CollapseResult>,
    pub evidence_pattern: Option<PatternAssessment>,
}

pub struct ProspectAnalyzer {
    config: VetaConfig,
    prior: PriorEngine,
    likelihoods: LikelihoodSuite,
    veto: VetoEngine,
    playbook: PlaybookEngine,
    fusion: FusionEngine,
    collapse: CollapseDetector,
}

impl ProspectAnalyzer {
    pub fn new(config: &VetaConfig) -> Self {
        let profiles = config.resolve_profiles();
        Self {
            config: config.clone(),
            prior: PriorEngine::new(config.prior.clone(), profiles.clone()),
            likelihoods: LikelihoodSuite::new(config),
            veto: VetoEngine::new(profiles.clone()),
            playbook: PlaybookEngine::new(profiles).with_detection_threshold(config.chemical.detection_threshold),
            fusion: FusionEngine::new(config.fusion.clone()),
            collapse: CollapseDetector::new(config.collapse.clone()),
        }
    }

    /// Build an analyzer from `root/veta.toml` and `VETA_*` overrides.
    pub fn load(root: &Path) -> AnalysisResult<Self> {
        let config = VetaConfig::load(root)?;
        Ok(Self::new(&config))
    }

    /// Replace the likelihood services (test doubles, extra services).
    /// The playbook keeps its unmixer; see [`Self::with_unmixer`].
    pub fn with_likelihoods(mut self, likelihoods: LikelihoodSuite) -> Self {
        self.likelihoods = likelihoods;
        self
    }

    /// Unmix spectra with `unmixer` in both the chemical likelihood and the
    /// playbook's spectral predicates.
    pub fn with_unmixer(mut self, unmixer: Arc<dyn SpectralUnmixer>) -> Self {
        self.likelihoods = LikelihoodSuite::with_unmixer(&self.config, Arc::clone(&unmixer));
        self.playbook = self.playbook.with_unmixer(unmixer);
        self
    }

    #[instrument(skip_all, fields(target_id = %request.target.id, commodity = %request.target.commodity))]
    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult<AnalysisReport> {
        let target = &request.target;

        let ((prior, likelihoods), (veto, playbook)) = rayon::join(
            || {
                rayon::join(
                    || self.prior.compute(target.commodity, &request.context),
                    || self.likelihoods.compute_all(target),
                )
            },
            || rayon::join(|| self.veto.evaluate(target), || self.playbook.evaluate(target)),
        );
        let likelihoods = likelihoods?;
        let veto = veto?;

        let posterior = self.fusion.compute_posterior(&prior, &likelihoods, &veto)?;

        let (collapse, evidence_pattern) = if posterior.vetoed {
            (None, None)
        } else {
            let means: Vec<f64> = likelihoods.iter().map(|l| l.mean).collect();
            let sigmas: Vec<f64> = likelihoods.iter().map(|l| l.std_dev()).collect();
            let collapse = self.collapse.detect_collapse(prior.mean, &means, &sigmas)?;
            let pattern = self.collapse.classify_evidence_pattern(&means);
            (Some(collapse), Some(pattern))
        };

        tracing::info!(
            posterior = posterior.mean,
            class = %posterior.confidence_class,
            vetoed = posterior.vetoed,
            assessment = %playbook.assessment,
            "analysis complete"
        );

        Ok(AnalysisReport {
            target_id: target.id.clone(),
            commodity: target.commodity,
            prior,
            likelihoods,
            veto,
            playbook,
            posterior,
            collapse,
            evidence_pattern,
        })
    }

    /// Analyze many targets in parallel; results keep request order.
    pub fn analyze_batch(&self, requests: &[AnalysisRequest]) -> Vec<AnalysisResult<AnalysisReport>> {
        requests.par_iter().map(|r| self.analyze(r)).collect()
    }
}

impl Default for ProspectAnalyzer {
    fn default() -> Self {
        Self::new(&VetaConfig::default())
    }
}
