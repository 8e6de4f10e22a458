//! Veto engine: ordered, short-circuiting evaluation of the registry.

use rustc_hash::FxHashMap;
use veta_core::config::ProfileSet;
use veta_core::errors::{AnalysisResult, VetoError};
use veta_core::types::GeologicalTarget;

use super::registry::{conditions, ConditionRecord};
use super::types::{CategoryAudit, ConditionOutcome, VetoCategory, VetoResult};

pub struct VetoEngine {
    profiles: ProfileSet,
    index: FxHashMap<&'static str, &'static ConditionRecord>,
}

impl VetoEngine {
    pub fn new(profiles: ProfileSet) -> Self {
        let index = conditions().iter().map(|c| (c.name, c)).collect();
        Self { profiles, index }
    }

    /// Evaluate every category in order. The first blocking failure stops
    /// the evaluation; later categories are not audited.
    pub fn evaluate(&self, target: &GeologicalTarget) -> AnalysisResult<VetoResult> {
        let mut audit_trail = Vec::with_capacity(VetoCategory::ALL.len());
        let mut total = 0usize;
        let mut passed = 0usize;

        for category in VetoCategory::ALL {
            let mut outcomes = Vec::new();
            for record in conditions().iter().filter(|c| c.category == category) {
                let outcome = self.run(record, target)?;
                total += 1;
                if outcome.passed {
                    passed += 1;
                }
                let blocking = outcome.blocking.then(|| outcome.reason.clone());
                outcomes.push(outcome);

                if let Some(reason) = blocking {
                    audit_trail.push(CategoryAudit {
                        category,
                        passed: false,
                        conditions: outcomes,
                    });
                    tracing::info!(
                        target_id = %target.id,
                        category = %category,
                        condition = record.name,
                        "geological veto"
                    );
                    return Ok(VetoResult {
                        passed: false,
                        probability: 0.0,
                        failure_category: Some(category),
                        failure_condition: Some(record.name.to_string()),
                        failure_reason: Some(reason),
                        audit_trail,
                        total_conditions: total,
                        passed_conditions: passed,
                        failed_conditions: total - passed,
                    });
                }
            }
            audit_trail.push(CategoryAudit {
                category,
                passed: true,
                conditions: outcomes,
            });
        }

        tracing::debug!(target_id = %target.id, total, passed, "veto passed");
        Ok(VetoResult {
            passed: true,
            probability: 1.0,
            failure_category: None,
            failure_condition: None,
            failure_reason: None,
            audit_trail,
            total_conditions: total,
            passed_conditions: passed,
            failed_conditions: total - passed,
        })
    }

    /// Evaluate a single named condition.
    pub fn evaluate_condition(&self, name: &str, target: &GeologicalTarget) -> AnalysisResult<ConditionOutcome> {
        let record = self
            .index
            .get(name)
            .ok_or_else(|| VetoError::UnknownCondition { name: name.to_string() })?;
        self.run(record, target)
    }

    fn run(&self, record: &ConditionRecord, target: &GeologicalTarget) -> AnalysisResult<ConditionOutcome> {
        let profile = self.profiles.get(target.commodity);
        let check = (record.check)(target, profile)?;
        let blocking = !check.passed && check.certainty >= record.required_confidence;
        tracing::trace!(
            condition = record.name,
            passed = check.passed,
            certainty = check.certainty,
            blocking,
            "veto condition evaluated"
        );
        Ok(ConditionOutcome {
            condition: record.name.to_string(),
            category: record.category,
            severity: record.severity,
            passed: check.passed,
            certainty: check.certainty,
            required_confidence: record.required_confidence,
            blocking,
            reason: check.reason,
        })
    }
}

impl Default for VetoEngine {
    fn default() -> Self {
        Self::new(ProfileSet::builtin())
    }
}
