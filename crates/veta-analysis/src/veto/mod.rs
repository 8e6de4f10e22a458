//! Geological veto: an absolute gate that forces the posterior to zero
//! when the geology rules a deposit out, whatever the evidence says.
//!
//! 15 conditions in 4 ordered categories, evaluated in declared order. The
//! first blocking failure ends the evaluation.

pub mod conditions;
pub mod engine;
pub mod registry;
pub mod types;

pub use engine::VetoEngine;
pub use registry::{category_conditions, condition, conditions, ConditionRecord};
pub use types::{CategoryAudit, ConditionCheck, ConditionOutcome, Severity, VetoCategory, VetoResult};
