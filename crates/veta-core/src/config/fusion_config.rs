//! Bayesian fusion configuration, including the evidence correlation table.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::EvidenceType;

/// One symmetric entry of the evidence correlation table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEntry {
    pub a: EvidenceType,
    pub b: EvidenceType,
    pub value: f64,
}

impl CorrelationEntry {
    pub const fn new(a: EvidenceType, b: EvidenceType, value: f64) -> Self {
        Self { a, b, value }
    }

    fn matches(&self, x: EvidenceType, y: EvidenceType) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// How the per-type maximum correlation is derived from the matrix row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxCorrelationMode {
    /// Take the max |r| of the row including the diagonal, then subtract 1.0.
    /// Because the diagonal is 1.0 this is never positive, so no correction
    /// ever fires with a valid table.
    #[default]
    RowMaxMinusDiagonal,
    /// Max |r| against the other supplied evidence types only.
    ExcludeDiagonal,
}

/// How the posterior mean is normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// `Z = prior × Π L`, floored. Posterior mean is `exp(logMean) / Z`.
    #[default]
    EvidenceProduct,
    /// `Z = prior × Π L + (1 − prior)`: likelihoods treated as ratios
    /// against the no-deposit hypothesis.
    BinaryOdds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Symmetric off-diagonal correlations between evidence types.
    pub correlations: Vec<CorrelationEntry>,
    /// Correlation for pairs not in the table. Default: 0.2.
    pub default_correlation: f64,
    /// Correction applies when max correlation exceeds this. Default: 0.7.
    pub correction_threshold: f64,
    pub max_correlation_mode: MaxCorrelationMode,
    pub normalization: NormalizationMode,
    /// Floor for the normalization constant. Default: 0.001.
    pub normalization_floor: f64,
    /// Credible interval level. Default: 0.95.
    pub credible_level: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            correlations: default_correlations(),
            default_correlation: constants::DEFAULT_PAIR_CORRELATION,
            correction_threshold: constants::CORRELATION_THRESHOLD,
            max_correlation_mode: MaxCorrelationMode::default(),
            normalization: NormalizationMode::default(),
            normalization_floor: constants::NORMALIZATION_FLOOR,
            credible_level: constants::DEFAULT_CREDIBLE_LEVEL,
        }
    }
}

/// Built-in correlation table.
pub fn default_correlations() -> Vec<CorrelationEntry> {
    use EvidenceType::*;
    vec![
        CorrelationEntry::new(Chemical, Structural, 0.3),
        CorrelationEntry::new(Chemical, Physical, 0.5),
        CorrelationEntry::new(Chemical, Surface, 0.7),
        CorrelationEntry::new(Structural, Physical, 0.4),
        CorrelationEntry::new(Structural, Surface, 0.6),
        CorrelationEntry::new(Physical, Surface, 0.3),
    ]
}

impl FusionConfig {
    /// Correlation between two evidence types. The diagonal is always 1.0.
    pub fn correlation(&self, a: EvidenceType, b: EvidenceType) -> f64 {
        if a == b {
            return 1.0;
        }
        self.correlations
            .iter()
            .find(|entry| entry.matches(a, b))
            .map(|entry| entry.value)
            .unwrap_or(self.default_correlation)
    }

    /// Replace (or insert) one pair in the table.
    pub fn with_correlation(mut self, a: EvidenceType, b: EvidenceType, value: f64) -> Self {
        self.correlations.retain(|entry| !entry.matches(a, b));
        self.correlations.push(CorrelationEntry::new(a, b, value));
        self
    }

    /// Normal quantile for the configured credible level.
    pub fn z_score(&self) -> f64 {
        z_for_level(self.credible_level)
    }
}

/// Two-sided normal quantile for the recognised levels; 1.96 otherwise.
pub fn z_for_level(level: f64) -> f64 {
    const LEVELS: [(f64, f64); 3] = [(0.90, 1.645), (0.95, 1.96), (0.99, 2.576)];
    LEVELS
        .iter()
        .find(|(l, _)| (l - level).abs() < 1e-9)
        .map(|(_, z)| *z)
        .unwrap_or(1.96)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_is_symmetric() {
        let cfg = FusionConfig::default();
        assert_eq!(
            cfg.correlation(EvidenceType::Surface, EvidenceType::Chemical),
            cfg.correlation(EvidenceType::Chemical, EvidenceType::Surface)
        );
        assert_eq!(cfg.correlation(EvidenceType::Physical, EvidenceType::Physical), 1.0);
    }

    #[test]
    fn unlisted_pair_uses_default() {
        let cfg = FusionConfig {
            correlations: vec![],
            ..FusionConfig::default()
        };
        assert_eq!(cfg.correlation(EvidenceType::Chemical, EvidenceType::Physical), 0.2);
    }

    #[test]
    fn z_lookup() {
        assert_eq!(z_for_level(0.90), 1.645);
        assert_eq!(z_for_level(0.99), 2.576);
        assert_eq!(z_for_level(0.80), 1.96);
    }
}
