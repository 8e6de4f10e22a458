//! Rule-based likelihoods for structural, physical and surface evidence.
//!
//! Each observation kind is looked up in the commodity's observation table:
//! supportive kinds carry weight +1.0, contrary kinds −0.5, unlisted kinds
//! are ignored. likelihood = Π (1 + w × strength × confidence), clamped.

use veta_core::config::ProfileSet;
use veta_core::constants::{LIKELIHOOD_CAP, NEUTRAL_LIKELIHOOD};
use veta_core::errors::{AnalysisResult, ValidationError};
use veta_core::types::{EvidenceType, FieldObservation, GeologicalTarget, LikelihoodDistribution};

use super::types::EvidenceLikelihood;

/// Lower clamp for rule-based likelihoods.
const RULE_LIKELIHOOD_FLOOR: f64 = 0.1;

/// Variance numerator: `0.25 / (n + 1)`.
const RULE_BASE_VARIANCE: f64 = 0.25;

#[derive(Debug, Clone)]
pub struct RuleLikelihood {
    evidence_type: EvidenceType,
    profiles: ProfileSet,
}

impl RuleLikelihood {
    /// Rule service for any non-chemical evidence type.
    pub fn new(evidence_type: EvidenceType, profiles: ProfileSet) -> AnalysisResult<Self> {
        if evidence_type == EvidenceType::Chemical {
            return Err(ValidationError::invalid(
                "evidence_type",
                "chemical evidence is scored from spectral samples, not observation rules",
            )
            .into());
        }
        Ok(Self {
            evidence_type,
            profiles,
        })
    }

    pub fn structural(profiles: ProfileSet) -> Self {
        Self {
            evidence_type: EvidenceType::Structural,
            profiles,
        }
    }

    pub fn physical(profiles: ProfileSet) -> Self {
        Self {
            evidence_type: EvidenceType::Physical,
            profiles,
        }
    }

    pub fn surface(profiles: ProfileSet) -> Self {
        Self {
            evidence_type: EvidenceType::Surface,
            profiles,
        }
    }

    fn observations<'a>(&self, target: &'a GeologicalTarget) -> &'a [FieldObservation] {
        match self.evidence_type {
            EvidenceType::Structural => &target.evidence.structural,
            EvidenceType::Physical => &target.evidence.physical,
            EvidenceType::Surface => &target.evidence.surface,
            EvidenceType::Chemical => &[],
        }
    }
}

impl EvidenceLikelihood for RuleLikelihood {
    fn evidence_type(&self) -> EvidenceType {
        self.evidence_type
    }

    fn compute(&self, target: &GeologicalTarget) -> AnalysisResult<LikelihoodDistribution> {
        let profile = self.profiles.get(target.commodity);
        let observations = self.observations(target);

        let mut product = NEUTRAL_LIKELIHOOD;
        let mut counted = 0usize;
        for obs in observations {
            if !obs.strength.is_finite() || !obs.confidence.is_finite() {
                return Err(ValidationError::invalid(
                    &format!("evidence.{}.{}", self.evidence_type, obs.kind),
                    "strength and confidence must be finite",
                )
                .into());
            }
            let weight = profile.observation_weight(&obs.kind);
            if weight == 0.0 {
                continue;
            }
            let signal = obs.strength.clamp(0.0, 1.0) * obs.confidence.clamp(0.0, 1.0);
            product *= 1.0 + weight * signal;
            counted += 1;
        }

        let mean = if counted == 0 {
            NEUTRAL_LIKELIHOOD
        } else {
            product.clamp(RULE_LIKELIHOOD_FLOOR, LIKELIHOOD_CAP)
        };
        let variance = RULE_BASE_VARIANCE / (counted as f64 + 1.0);

        tracing::debug!(
            evidence_type = %self.evidence_type,
            observations = observations.len(),
            counted,
            mean,
            "rule likelihood computed"
        );
        Ok(LikelihoodDistribution::new(self.evidence_type, mean, variance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veta_core::types::Commodity;

    fn target() -> GeologicalTarget {
        GeologicalTarget::new("t", Commodity::CopperPorphyry)
    }

    #[test]
    fn no_observations_is_neutral() {
        let l = RuleLikelihood::structural(ProfileSet::builtin())
            .compute(&target())
            .unwrap();
        assert_eq!(l.mean, 1.0);
        assert_eq!(l.variance, 0.25);
    }

    #[test]
    fn supportive_and_contrary_combine() {
        let mut t = target();
        t.evidence.structural = vec![
            FieldObservation::new("fault_intersection", 1.0, 1.0),
            FieldObservation::new("thick_cover", 0.5, 1.0),
            FieldObservation::new("unknown_kind", 1.0, 1.0),
        ];
        let l = RuleLikelihood::structural(ProfileSet::builtin())
            .compute(&t)
            .unwrap();
        // (1 + 1.0) × (1 − 0.25)
        assert!((l.mean - 1.5).abs() < 1e-12);
        assert!((l.variance - 0.25 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn strongly_contrary_hits_floor() {
        let mut t = target();
        t.evidence.surface = (0..10)
            .map(|_| FieldObservation::new("barren_outcrop", 1.0, 1.0))
            .collect();
        let l = RuleLikelihood::surface(ProfileSet::builtin()).compute(&t).unwrap();
        assert_eq!(l.mean, 0.1);
    }

    #[test]
    fn chemical_rule_table_is_rejected() {
        assert!(RuleLikelihood::new(EvidenceType::Chemical, ProfileSet::builtin()).is_err());
    }
}
