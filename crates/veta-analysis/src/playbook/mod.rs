//! Commodity playbooks.
//!
//! A playbook is a closed variant per deposit model. Each variant supplies
//! three predicate tables (mandatory conditions, kill factors, supportive
//! evidence) and one shared algorithm turns them into a favorability call.

pub mod copper_porphyry;
pub mod engine;
pub mod hydrocarbon;
pub mod lithium_brine;
pub mod predicates;
pub mod types;

pub use engine::{assess, PlaybookEngine};
pub use types::{
    Assessment, KillFactor, KillOutcome, MandatoryCondition, MandatoryOutcome, MandatoryResult,
    Playbook, PlaybookResult, SupportiveEvidence, SupportiveItem, SupportiveScore, TriggeredKill,
};
