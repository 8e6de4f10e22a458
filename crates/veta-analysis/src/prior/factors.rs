//! The four prior factors. Each returns a score in [0.0, 1.0] plus an audit
//! line; some also raise a data-quality flag.

use veta_core::config::CommodityProfile;
use veta_core::types::parse_age;

use super::types::DataQualityFlag;

/// Floor for the age and analog factors.
const FACTOR_FLOOR: f64 = 0.05;

/// Stratigraphic score when no lithology was supplied.
const MISSING_STRATIGRAPHY_SCORE: f64 = 0.5;

/// Stratigraphic score when nothing supplied is permissive.
const NON_PERMISSIVE_SCORE: f64 = 0.1;

/// Deposit density is counted per this many km².
const DENSITY_UNIT_KM2: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub score: f64,
    pub reasoning: String,
    pub flag: Option<DataQualityFlag>,
}

impl FactorScore {
    fn new(score: f64, reasoning: String) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
            reasoning,
            flag: None,
        }
    }

    fn flagged(mut self, flag: DataQualityFlag) -> Self {
        self.flag = Some(flag);
        self
    }
}

pub fn tectonic_factor(profile: &CommodityProfile, setting: &str) -> FactorScore {
    let score = profile.tectonic_score(setting);
    FactorScore::new(
        score,
        format!(
            "tectonic setting '{}' scores {:.2} for {}",
            setting, score, profile.commodity
        ),
    )
}

/// Linear fall-off from the centre of the commodity's age window.
pub fn age_factor(profile: &CommodityProfile, age: &str) -> FactorScore {
    let parsed = parse_age(age);
    let centre = profile.age_window_centre();
    let distance = (parsed.value_ma - centre).abs();
    let score = (1.0 - distance / profile.age_window_width()).clamp(FACTOR_FLOOR, 1.0);

    let (lo, hi) = profile.age_window_ma;
    let factor = FactorScore::new(
        score,
        format!(
            "age {:.1} Ma vs window {lo:.0}-{hi:.0} Ma scores {score:.2}",
            parsed.value_ma
        ),
    );
    if parsed.fallback {
        tracing::warn!(age, fallback_ma = parsed.value_ma, "unparsable age, using fallback");
        factor.flagged(DataQualityFlag::AgeFallback)
    } else {
        factor
    }
}

/// Best permissibility among the supplied host lithologies.
pub fn stratigraphic_factor(profile: &CommodityProfile, lithologies: &[String]) -> FactorScore {
    if lithologies.is_empty() {
        return FactorScore::new(
            MISSING_STRATIGRAPHY_SCORE,
            "no host lithologies supplied, stratigraphy scored neutral".to_string(),
        )
        .flagged(DataQualityFlag::StratigraphyMissing);
    }

    let best = lithologies
        .iter()
        .filter_map(|l| profile.lithology_score(l).map(|s| (l, s)))
        .max_by(|a, b| a.1.total_cmp(&b.1));

    match best {
        Some((lithology, score)) => FactorScore::new(
            score,
            format!("host lithology '{lithology}' is permissive ({score:.2})"),
        ),
        None => FactorScore::new(
            NON_PERMISSIVE_SCORE,
            format!("none of {} host lithologies is permissive", lithologies.len()),
        ),
    }
}

/// Saturating score on known-deposit density.
pub fn analog_factor(known_deposits: u32, search_area_km2: f64) -> FactorScore {
    if search_area_km2.is_nan() || search_area_km2 <= 0.0 {
        return FactorScore::new(
            FACTOR_FLOOR,
            "no search area, analog density scored at floor".to_string(),
        )
        .flagged(DataQualityFlag::NoSearchArea);
    }
    let density = f64::from(known_deposits) / (search_area_km2 / DENSITY_UNIT_KM2);
    let score = (1.0 - (-density).exp()).clamp(FACTOR_FLOOR, 1.0);
    FactorScore::new(
        score,
        format!(
            "{known_deposits} known deposits in {search_area_km2:.0} km² ({density:.2} per 10,000 km²) scores {score:.2}"
        ),
    )
}
