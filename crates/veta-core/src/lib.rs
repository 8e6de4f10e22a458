//! # veta-core
//!
//! Foundation crate for the Veta prospectivity engine.
//! Defines the geological input types, distribution value types, errors,
//! configuration, tracing setup, and constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::VetaConfig;
pub use errors::{AnalysisError, AnalysisResult};
pub use types::{
    Commodity, ConfidenceClass, EvidenceType, GeologicalTarget, LikelihoodDistribution,
    PosteriorDistribution, PriorDistribution,
};
