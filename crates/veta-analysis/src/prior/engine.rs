//! Prior engine: geometric mean of the four factors, clamped.

use veta_core::config::{PriorConfig, ProfileSet};
use veta_core::types::{Commodity, PriorDistribution, PriorFactors};

use super::factors::{self, FactorScore};
use super::types::RegionalContext;

/// Computes the regional prior for a commodity.
#[derive(Debug, Clone, Default)]
pub struct PriorEngine {
    config: PriorConfig,
    profiles: ProfileSet,
}

impl PriorEngine {
    pub fn new(config: PriorConfig, profiles: ProfileSet) -> Self {
        Self { config, profiles }
    }

    /// Compute the prior distribution.
    ///
    /// prior = (tectonic × age × stratigraphic × analog)^(1/4), clamped to
    /// [floor, ceiling]. Variance = scale × (1 + |ln prior|).
    pub fn compute(&self, commodity: Commodity, context: &RegionalContext) -> PriorDistribution {
        let profile = self.profiles.get(commodity);

        let scored: [FactorScore; 4] = [
            factors::tectonic_factor(profile, &context.tectonic_setting),
            factors::age_factor(profile, &context.age),
            factors::stratigraphic_factor(profile, &context.host_lithologies),
            factors::analog_factor(context.known_deposits, context.search_area_km2),
        ];

        let factors = PriorFactors {
            tectonic: scored[0].score,
            age: scored[1].score,
            stratigraphic: scored[2].score,
            analog_density: scored[3].score,
        };

        let product: f64 = factors.as_array().iter().product();
        let mean = product.powf(0.25).clamp(self.config.floor, self.config.ceiling);
        let variance = self.config.variance_scale * (1.0 + mean.ln().abs());
        let half_width = self.config.interval_sigmas * variance.sqrt();
        let confidence_interval = (
            (mean - half_width).clamp(0.0, 1.0),
            (mean + half_width).clamp(0.0, 1.0),
        );

        let mut reasoning: Vec<String> = scored.iter().map(|f| f.reasoning.clone()).collect();
        reasoning.push(format!(
            "geometric mean {:.4} bounded to [{}, {}] gives prior {mean:.4}",
            product.powf(0.25),
            self.config.floor,
            self.config.ceiling
        ));
        let data_quality_flags: Vec<String> = scored
            .iter()
            .filter_map(|f| f.flag)
            .map(|flag| flag.as_str().to_string())
            .collect();

        tracing::debug!(
            commodity = %commodity,
            mean,
            variance,
            flags = data_quality_flags.len(),
            "prior computed"
        );

        PriorDistribution {
            mean,
            variance,
            confidence_interval,
            factors,
            reasoning,
            data_quality_flags,
        }
    }
}
