//! Hydrothermal alteration assemblages.
//!
//! An assemblage is recognised from a required and an optional mineral set.
//! score = 0.5 × required_fraction + 0.3 × optional_coverage + 0.2 × mean_abundance

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::unmixing::MineralDetection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlterationAssemblage {
    Potassic,
    Phyllic,
    Argillic,
    Propylitic,
}

impl AlterationAssemblage {
    pub const ALL: [AlterationAssemblage; 4] = [
        Self::Potassic,
        Self::Phyllic,
        Self::Argillic,
        Self::Propylitic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Potassic => "potassic",
            Self::Phyllic => "phyllic",
            Self::Argillic => "argillic",
            Self::Propylitic => "propylitic",
        }
    }

    pub fn required(&self) -> &'static [&'static str] {
        match self {
            Self::Potassic => &["biotite"],
            Self::Phyllic => &["sericite"],
            Self::Argillic => &["kaolinite"],
            Self::Propylitic => &["chlorite", "epidote"],
        }
    }

    pub fn optional(&self) -> &'static [&'static str] {
        match self {
            Self::Potassic => &["magnetite", "anhydrite"],
            Self::Phyllic => &["illite", "pyrite"],
            Self::Argillic => &["alunite", "pyrophyllite", "montmorillonite"],
            Self::Propylitic => &["calcite"],
        }
    }
}

impl fmt::Display for AlterationAssemblage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterationScore {
    pub assemblage: AlterationAssemblage,
    pub required_fraction: f64,
    pub optional_coverage: f64,
    pub mean_abundance: f64,
    pub score: f64,
}

/// Score every assemblage that has at least one required mineral present,
/// strongest first. A mineral seen in several samples counts at its
/// highest abundance.
pub fn identify_assemblages(detections: &[MineralDetection]) -> Vec<AlterationScore> {
    let mut abundance: FxHashMap<&str, f64> = FxHashMap::default();
    for d in detections {
        let best = abundance.entry(d.mineral.as_str()).or_insert(d.abundance);
        *best = best.max(d.abundance);
    }

    let mut scores: Vec<AlterationScore> = AlterationAssemblage::ALL
        .iter()
        .filter_map(|&assemblage| score_assemblage(assemblage, &abundance))
        .collect();
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

fn score_assemblage(
    assemblage: AlterationAssemblage,
    abundance: &FxHashMap<&str, f64>,
) -> Option<AlterationScore> {
    let required = assemblage.required();
    let optional = assemblage.optional();

    let required_hits: Vec<f64> = required.iter().filter_map(|m| abundance.get(m).copied()).collect();
    if required_hits.is_empty() {
        return None;
    }
    let optional_hits: Vec<f64> = optional.iter().filter_map(|m| abundance.get(m).copied()).collect();

    let required_fraction = required_hits.len() as f64 / required.len() as f64;
    let optional_coverage = if optional.is_empty() {
        0.0
    } else {
        optional_hits.len() as f64 / optional.len() as f64
    };
    let all_hits: Vec<f64> = required_hits.iter().chain(&optional_hits).copied().collect();
    let mean_abundance = all_hits.iter().sum::<f64>() / all_hits.len() as f64;

    Some(AlterationScore {
        assemblage,
        required_fraction,
        optional_coverage,
        mean_abundance,
        score: 0.5 * required_fraction + 0.3 * optional_coverage + 0.2 * mean_abundance,
    })
}
