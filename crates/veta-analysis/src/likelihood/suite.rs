//! The standard set of four likelihood services, evaluated in parallel.

use std::sync::Arc;

use rayon::prelude::*;
use veta_core::config::VetaConfig;
use veta_core::errors::AnalysisResult;
use veta_core::types::{GeologicalTarget, LikelihoodDistribution};

use super::chemical::{ChemicalLikelihood, LibraryUnmixer, SpectralUnmixer};
use super::rules::RuleLikelihood;
use super::types::EvidenceLikelihood;

pub struct LikelihoodSuite {
    services: Vec<Box<dyn EvidenceLikelihood>>,
}

impl LikelihoodSuite {
    /// Chemical, structural, physical and surface services.
    pub fn new(config: &VetaConfig) -> Self {
        Self::with_unmixer(config, Arc::new(LibraryUnmixer::default()))
    }

    /// The standard services, with `unmixer` behind the chemical one.
    pub fn with_unmixer(config: &VetaConfig, unmixer: Arc<dyn SpectralUnmixer>) -> Self {
        let profiles = config.resolve_profiles();
        let chemical = ChemicalLikelihood::new(config.chemical.clone(), profiles.clone()).with_unmixer(unmixer);
        let services: Vec<Box<dyn EvidenceLikelihood>> = vec![
            Box::new(chemical),
            Box::new(RuleLikelihood::structural(profiles.clone())),
            Box::new(RuleLikelihood::physical(profiles.clone())),
            Box::new(RuleLikelihood::surface(profiles)),
        ];
        Self { services }
    }

    pub fn with_services(services: Vec<Box<dyn EvidenceLikelihood>>) -> Self {
        Self { services }
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// One likelihood per service, in service order.
    pub fn compute_all(&self, target: &GeologicalTarget) -> AnalysisResult<Vec<LikelihoodDistribution>> {
        self.services
            .par_iter()
            .map(|service| service.compute(target))
            .collect()
    }
}
