//! Evidence likelihood services.
//!
//! Every service implements [`EvidenceLikelihood`] and produces one
//! [`LikelihoodDistribution`](veta_core::types::LikelihoodDistribution) per
//! analysis. Chemical evidence is scored in depth from spectral samples; the
//! structural, physical and surface services are rule tables over field
//! observations.

pub mod chemical;
pub mod rules;
pub mod suite;
pub mod types;

pub use chemical::{ChemicalAssessment, ChemicalLikelihood};
pub use rules::RuleLikelihood;
pub use suite::LikelihoodSuite;
pub use types::EvidenceLikelihood;
