//! # veta-analysis
//!
//! The probabilistic decision pipeline: regional prior, per-evidence
//! likelihoods, the geological veto, commodity playbooks, Bayesian fusion,
//! and the probability collapse detector.
//!
//! Every engine is a pure function over already-resolved inputs. The
//! [`pipeline::ProspectAnalyzer`] runs the independent stages concurrently
//! and joins them at fusion.

pub mod collapse;
pub mod fusion;
pub mod likelihood;
pub mod pipeline;
pub mod playbook;
pub mod prior;
pub mod veto;

pub use collapse::{CollapseDetector, CollapseResult};
pub use fusion::FusionEngine;
pub use pipeline::{AnalysisReport, AnalysisRequest, ProspectAnalyzer};
pub use playbook::{Playbook, PlaybookResult};
pub use prior::{PriorEngine, RegionalContext};
pub use veto::{VetoEngine, VetoResult};
