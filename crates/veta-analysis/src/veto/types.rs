//! Veto types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Veto categories, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VetoCategory {
    Stratigraphic,
    Temporal,
    Structural,
    Preservation,
}

impl VetoCategory {
    pub const ALL: [VetoCategory; 4] = [
        Self::Stratigraphic,
        Self::Temporal,
        Self::Structural,
        Self::Preservation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stratigraphic => "stratigraphic",
            Self::Temporal => "temporal",
            Self::Structural => "structural",
            Self::Preservation => "preservation",
        }
    }
}

impl fmt::Display for VetoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Major,
    Critical,
}

/// Raw output of a condition check.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionCheck {
    pub passed: bool,
    /// How sure the check is of its answer, in [0.0, 1.0].
    pub certainty: f64,
    pub reason: String,
}

impl ConditionCheck {
    pub fn pass(certainty: f64, reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            certainty: certainty.clamp(0.0, 1.0),
            reason: reason.into(),
        }
    }

    pub fn fail(certainty: f64, reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            certainty: certainty.clamp(0.0, 1.0),
            reason: reason.into(),
        }
    }

    /// Pass for conditions that do not apply to the commodity.
    pub fn not_applicable(reason: impl Into<String>) -> Self {
        Self::pass(1.0, reason)
    }
}

/// One evaluated condition as recorded in the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionOutcome {
    pub condition: String,
    pub category: VetoCategory,
    pub severity: Severity,
    pub passed: bool,
    pub certainty: f64,
    pub required_confidence: f64,
    /// Negative and at least as certain as required.
    pub blocking: bool,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAudit {
    pub category: VetoCategory,
    pub passed: bool,
    pub conditions: Vec<ConditionOutcome>,
}

/// Outcome of the full veto evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VetoResult {
    pub passed: bool,
    /// 1.0 when passed, 0.0 when vetoed.
    pub probability: f64,
    pub failure_category: Option<VetoCategory>,
    pub failure_condition: Option<String>,
    pub failure_reason: Option<String>,
    /// Categories in evaluation order, up to and including a failing one.
    pub audit_trail: Vec<CategoryAudit>,
    pub total_conditions: usize,
    pub passed_conditions: usize,
    pub failed_conditions: usize,
}

impl VetoResult {
    /// A passing result, for callers that skip the veto stage.
    pub fn unchecked() -> Self {
        Self {
            passed: true,
            probability: 1.0,
            failure_category: None,
            failure_condition: None,
            failure_reason: None,
            audit_trail: Vec::new(),
            total_conditions: 0,
            passed_conditions: 0,
            failed_conditions: 0,
        }
    }

    /// `category/condition: reason`, or `None` when passed.
    pub fn summary(&self) -> Option<String> {
        match (&self.failure_category, &self.failure_condition, &self.failure_reason) {
            (Some(cat), Some(cond), Some(reason)) => Some(format!("{cat}/{cond}: {reason}")),
            _ => None,
        }
    }
}
