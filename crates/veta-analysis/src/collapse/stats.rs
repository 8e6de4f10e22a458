//! Statistics helpers for the collapse detector, on top of `statrs`.

use statrs::statistics::Statistics;

/// Clamp bound for the log-odds transform.
pub const LOG_ODDS_EPSILON: f64 = 1e-6;

/// Geometric mean; 0.0 for an empty slice.
pub fn geometric_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let g = values.iter().geometric_mean();
    if g.is_finite() {
        g
    } else {
        0.0
    }
}

/// `ln(p / (1 − p))` with `p` clamped into (0, 1).
pub fn log_odds(value: f64) -> f64 {
    let p = value.clamp(LOG_ODDS_EPSILON, 1.0 - LOG_ODDS_EPSILON);
    (p / (1.0 - p)).ln()
}

/// `1 − |CV|` of the log-odds of the likelihoods.
///
/// 1.0 when they agree exactly, 0.0 when nothing can be scored.
pub fn convergence_score(likelihoods: &[f64]) -> f64 {
    let odds: Vec<f64> = likelihoods
        .iter()
        .filter(|l| l.is_finite())
        .map(|&l| log_odds(l))
        .collect();
    if odds.is_empty() {
        return 0.0;
    }
    let sd = odds.iter().population_std_dev();
    if sd == 0.0 {
        return 1.0;
    }
    let mean = odds.iter().mean();
    if mean == 0.0 {
        return 0.0;
    }
    (1.0 - (sd / mean).abs()).clamp(0.0, 1.0)
}

/// Pearson correlation; 0.0 when undefined (fewer than two points or a
/// constant series).
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return 0.0;
    }
    let sx = xs.iter().population_std_dev();
    let sy = ys.iter().population_std_dev();
    if sx == 0.0 || sy == 0.0 || !sx.is_finite() || !sy.is_finite() {
        return 0.0;
    }
    let cov = xs.iter().population_covariance(ys.iter());
    (cov / (sx * sy)).clamp(-1.0, 1.0)
}

/// `exp(Σ wᵢ ln xᵢ / Σ wᵢ)`; 0.0 when empty or weightless.
pub fn weighted_geometric_mean(values: &[f64], weights: &[f64]) -> f64 {
    let total: f64 = weights.iter().sum();
    if values.is_empty() || total <= 0.0 {
        return 0.0;
    }
    let log_sum: f64 = values
        .iter()
        .zip(weights)
        .map(|(v, w)| w * v.max(f64::MIN_POSITIVE).ln())
        .sum();
    (log_sum / total).exp()
}
