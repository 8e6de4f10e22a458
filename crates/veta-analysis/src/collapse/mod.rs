//! Probability collapse detection: recognises when several independent
//! lines of evidence converge strongly enough to imply high certainty.

pub mod detector;
pub mod stats;
pub mod types;

pub use detector::CollapseDetector;
pub use types::{CollapseConfidence, CollapseResult, EvidencePattern, PatternAssessment};
