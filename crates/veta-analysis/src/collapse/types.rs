//! Collapse detector output types.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollapseConfidence {
    Low,
    Medium,
    High,
    Collapsed,
}

impl CollapseConfidence {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Collapsed => "COLLAPSED",
        }
    }
}

impl fmt::Display for CollapseConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollapseResult {
    /// All four criteria held.
    pub collapsed: bool,
    pub supportive_count: usize,
    /// `1 − geomean(uncertainties)`.
    pub uncertainty_reduction: f64,
    pub convergence_score: f64,
    /// Weighted supportive strength relative to the prior, capped.
    pub collapse_strength: f64,
    pub independence_valid: bool,
    /// Pearson r between sorted likelihoods and sorted uncertainties.
    pub independence_correlation: f64,
    pub confidence_level: CollapseConfidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidencePattern {
    Convergent,
    Divergent,
    Mixed,
    InsufficientData,
}

impl EvidencePattern {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Convergent => "CONVERGENT",
            Self::Divergent => "DIVERGENT",
            Self::Mixed => "MIXED",
            Self::InsufficientData => "INSUFFICIENT_DATA",
        }
    }

    /// Operator-facing guidance for the pattern.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::Convergent => "Evidence lines agree; prioritise for follow-up.",
            Self::Divergent => "Evidence lines disagree; check data quality and look for a missed process before committing spend.",
            Self::Mixed => "Partial agreement; acquire the weakest evidence type to resolve.",
            Self::InsufficientData => "Fewer than two evidence lines; collect more data before interpreting.",
        }
    }
}

impl fmt::Display for EvidencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAssessment {
    pub pattern: EvidencePattern,
    pub convergence_score: f64,
    pub guidance: String,
}
