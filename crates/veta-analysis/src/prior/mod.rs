//! Regional prior: four compatibility factors combined into a bounded
//! probability of deposit existence before any site evidence is seen.

pub mod engine;
pub mod factors;
pub mod types;

pub use engine::PriorEngine;
pub use types::{DataQualityFlag, RegionalContext};
