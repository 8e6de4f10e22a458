//! Prior engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorConfig {
    /// Lowest prior emitted. Default: 0.01.
    pub floor: f64,
    /// Highest prior emitted. Default: 0.3.
    pub ceiling: f64,
    /// Variance scale in `scale × (1 + |ln prior|)`. Default: 0.01.
    pub variance_scale: f64,
    /// Half-width of the prior interval in standard deviations. Default: 2.0.
    pub interval_sigmas: f64,
}

impl Default for PriorConfig {
    fn default() -> Self {
        Self {
            floor: constants::PRIOR_FLOOR,
            ceiling: constants::PRIOR_CEILING,
            variance_scale: constants::PRIOR_VARIANCE_SCALE,
            interval_sigmas: 2.0,
        }
    }
}
