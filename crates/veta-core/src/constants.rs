//! Shared constants for the Veta prospectivity engine.

/// Veta version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Prior ----

/// Lowest prior the engine will emit.
pub const PRIOR_FLOOR: f64 = 0.01;

/// Highest prior the engine will emit. Regional geology alone never
/// justifies more than this.
pub const PRIOR_CEILING: f64 = 0.3;

/// Base variance scale for the prior: `scale × (1 + |ln prior|)`.
pub const PRIOR_VARIANCE_SCALE: f64 = 0.01;

/// Age (Ma) assumed when an age string cannot be parsed.
pub const AGE_FALLBACK_MA: f64 = 100.0;

// ---- Likelihood ----

/// Upper bound for any single evidence likelihood.
pub const LIKELIHOOD_CAP: f64 = 5.0;

/// Chemical likelihood when no diagnostic mineral was detected.
/// Absence of diagnostic minerals is evidence against, not neutral.
pub const NO_DETECTION_LIKELIHOOD: f64 = 0.1;

/// Minimum abundance for a mineral detection to be kept.
pub const DETECTION_ABUNDANCE_THRESHOLD: f64 = 0.05;

/// Floor applied to each `abundance × confidence` term.
pub const DETECTION_TERM_FLOOR: f64 = 0.1;

/// Neutral likelihood (no information).
pub const NEUTRAL_LIKELIHOOD: f64 = 1.0;

// ---- Fusion ----

/// Floor for the normalization constant.
pub const NORMALIZATION_FLOOR: f64 = 0.001;

/// Correlation above which the independence correction applies.
pub const CORRELATION_THRESHOLD: f64 = 0.7;

/// Correlation for evidence pairs not listed in the table.
pub const DEFAULT_PAIR_CORRELATION: f64 = 0.2;

/// Default credible interval level.
pub const DEFAULT_CREDIBLE_LEVEL: f64 = 0.95;

// ---- Collapse ----

/// Upper bound for collapse strength.
pub const COLLAPSE_STRENGTH_CAP: f64 = 10.0;

/// Offset added to each uncertainty before inverting it into a weight.
pub const UNCERTAINTY_WEIGHT_EPSILON: f64 = 0.001;

/// Lower bound applied to the prior mean when dividing by it.
pub const PRIOR_DIVISOR_FLOOR: f64 = 0.001;

// ---- Playbook ----

/// Confidence reported for an unfavorable call driven by a failed
/// mandatory condition or a triggered kill factor.
pub const NEGATIVE_CALL_CONFIDENCE: f64 = 0.9;

/// Supportive evidence at or below this strength is discarded.
pub const SUPPORTIVE_STRENGTH_FLOOR: f64 = 0.1;

/// Supportive evidence above this strength counts as strong.
pub const STRONG_EVIDENCE_THRESHOLD: f64 = 0.7;

// ---- Veto taxonomy ----

/// Number of veto categories.
pub const VETO_CATEGORY_COUNT: usize = 4;

/// Number of veto conditions across all categories.
pub const VETO_CONDITION_COUNT: usize = 15;
