//! The shared likelihood contract.

use veta_core::errors::AnalysisResult;
use veta_core::types::{EvidenceType, GeologicalTarget, LikelihoodDistribution};

/// A scorer for one line of evidence.
///
/// Implementations read the target's commodity and its evidence collection
/// for [`evidence_type`](Self::evidence_type) and return a multiplicative
/// likelihood (> 1.0 supportive, < 1.0 contrary).
pub trait EvidenceLikelihood: Send + Sync {
    fn evidence_type(&self) -> EvidenceType;

    fn compute(&self, target: &GeologicalTarget) -> AnalysisResult<LikelihoodDistribution>;
}
