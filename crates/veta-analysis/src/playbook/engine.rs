//! The single playbook algorithm, shared by every variant.

use std::sync::Arc;

use veta_core::config::{CommodityProfile, ProfileSet};
use veta_core::constants::{
    DETECTION_ABUNDANCE_THRESHOLD, NEGATIVE_CALL_CONFIDENCE, STRONG_EVIDENCE_THRESHOLD,
    SUPPORTIVE_STRENGTH_FLOOR,
};
use veta_core::types::GeologicalTarget;

use super::types::{
    Assessment, KillOutcome, MandatoryOutcome, MandatoryResult, Playbook, PlaybookResult,
    SupportiveItem, SupportiveScore, TriggeredKill,
};
use crate::likelihood::chemical::{LibraryUnmixer, SpectralScan, SpectralUnmixer};

/// Total supportive strength needed for a favorable call.
const FAVORABLE_TOTAL: f64 = 2.0;
/// Total supportive strength needed for a marginal call.
const MARGINAL_TOTAL: f64 = 1.0;
/// Mandatory certainty below which a pass is reported as a risk.
const LOW_CERTAINTY: f64 = 0.7;

/// Runs playbooks. Spectral predicates read one unmixing pass made with
/// the same unmixer and abundance threshold as the chemical likelihood.
#[derive(Clone)]
pub struct PlaybookEngine {
    profiles: ProfileSet,
    unmixer: Arc<dyn SpectralUnmixer>,
    detection_threshold: f64,
}

impl PlaybookEngine {
    pub fn new(profiles: ProfileSet) -> Self {
        Self {
            profiles,
            unmixer: Arc::new(LibraryUnmixer::default()),
            detection_threshold: DETECTION_ABUNDANCE_THRESHOLD,
        }
    }

    pub fn with_unmixer(mut self, unmixer: Arc<dyn SpectralUnmixer>) -> Self {
        self.unmixer = unmixer;
        self
    }

    pub fn with_detection_threshold(mut self, threshold: f64) -> Self {
        self.detection_threshold = threshold;
        self
    }

    /// Evaluate the target with its commodity's playbook.
    pub fn evaluate(&self, target: &GeologicalTarget) -> PlaybookResult {
        self.evaluate_with(Playbook::for_commodity(target.commodity), target)
    }

    pub fn evaluate_with(&self, playbook: Playbook, target: &GeologicalTarget) -> PlaybookResult {
        let profile = self.profiles.get(playbook.commodity());

        let mandatory = evaluate_mandatory(playbook, target, profile);
        let kill_factors = evaluate_kill_factors(playbook, target, profile);
        let scan = SpectralScan::run(
            self.unmixer.as_ref(),
            &target.evidence.chemical.samples,
            self.detection_threshold,
        );
        let supportive = score_supportive(playbook, target, profile, &scan);

        let (assessment, confidence) = assess(&mandatory, &kill_factors, &supportive);
        let recommendations = recommendations(playbook, assessment, &mandatory, &kill_factors, &supportive);
        let risk_factors = risk_factors(&mandatory, &kill_factors, &supportive);

        tracing::debug!(
            target_id = %target.id,
            playbook = %playbook,
            assessment = %assessment,
            confidence,
            supportive = supportive.len(),
            "playbook evaluated"
        );

        PlaybookResult {
            commodity: playbook.commodity(),
            mandatory,
            kill_factors,
            supportive,
            assessment,
            confidence,
            recommendations,
            risk_factors,
        }
    }
}

impl Default for PlaybookEngine {
    fn default() -> Self {
        Self::new(ProfileSet::builtin())
    }
}

/// Mandatory conditions in order; the first failure stops evaluation.
fn evaluate_mandatory(playbook: Playbook, target: &GeologicalTarget, profile: &CommodityProfile) -> MandatoryOutcome {
    let mut results = Vec::new();
    for condition in playbook.mandatory() {
        let (passed, certainty, detail) = (condition.check)(target, profile);
        results.push(MandatoryResult {
            name: condition.name.to_string(),
            passed,
            certainty: certainty.clamp(0.0, 1.0),
            detail,
        });
        if !passed {
            return MandatoryOutcome {
                all_passed: false,
                failed_condition: Some(condition.name.to_string()),
                triggers_veto: true,
                results,
            };
        }
    }
    MandatoryOutcome {
        all_passed: true,
        failed_condition: None,
        triggers_veto: false,
        results,
    }
}

/// Every kill factor is evaluated; all triggered ones are reported.
fn evaluate_kill_factors(playbook: Playbook, target: &GeologicalTarget, profile: &CommodityProfile) -> KillOutcome {
    let triggered: Vec<TriggeredKill> = playbook
        .kill_factors()
        .iter()
        .filter_map(|kill| {
            (kill.check)(target, profile).map(|detail| TriggeredKill {
                name: kill.name.to_string(),
                description: kill.description.to_string(),
                detail,
            })
        })
        .collect();
    let killed = !triggered.is_empty();
    KillOutcome {
        killed,
        requires_veto: killed,
        triggered,
    }
}

/// Supportive evidence above the strength floor, strongest first.
fn score_supportive(
    playbook: Playbook,
    target: &GeologicalTarget,
    profile: &CommodityProfile,
    scan: &SpectralScan,
) -> Vec<SupportiveItem> {
    let mut items: Vec<SupportiveItem> = playbook
        .supportive()
        .iter()
        .map(|s| {
            let strength = match s.score {
                SupportiveScore::Context(score) => score(target, profile),
                SupportiveScore::Spectral(score) => score(scan),
            };
            SupportiveItem::new(s.name, strength.clamp(0.0, 1.0), s.description)
        })
        .filter(|item| item.strength > SUPPORTIVE_STRENGTH_FLOOR)
        .collect();
    // Stable sort keeps table order among equal strengths.
    items.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    items
}

/// Favorability call and its confidence.
///
/// A failed mandatory condition or any kill factor is unfavorable at 0.9.
/// Otherwise favorable needs total strength > 2.0 with two strong items,
/// marginal needs > 1.0 with one. Confidence is
/// `0.6 × mean(mandatory certainty) + 0.4 × mean(supportive strength)`.
pub fn assess(mandatory: &MandatoryOutcome, kills: &KillOutcome, supportive: &[SupportiveItem]) -> (Assessment, f64) {
    if !mandatory.all_passed || kills.killed {
        return (Assessment::Unfavorable, NEGATIVE_CALL_CONFIDENCE);
    }

    let total: f64 = supportive.iter().map(|s| s.strength).sum();
    let strong = supportive
        .iter()
        .filter(|s| s.strength > STRONG_EVIDENCE_THRESHOLD)
        .count();

    let assessment = if total > FAVORABLE_TOTAL && strong >= 2 {
        Assessment::Favorable
    } else if total > MARGINAL_TOTAL && strong >= 1 {
        Assessment::Marginal
    } else {
        Assessment::Unfavorable
    };

    let certainty = mean(mandatory.results.iter().map(|r| r.certainty));
    let strength = mean(supportive.iter().map(|s| s.strength));
    let confidence = (0.6 * certainty + 0.4 * strength).clamp(0.0, 1.0);
    (assessment, confidence)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

fn recommendations(
    playbook: Playbook,
    assessment: Assessment,
    mandatory: &MandatoryOutcome,
    kills: &KillOutcome,
    supportive: &[SupportiveItem],
) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(ref failed) = mandatory.failed_condition {
        out.push(format!("Resolve mandatory condition '{failed}' before further work"));
    }
    for kill in &kills.triggered {
        out.push(format!("Deprioritize: kill factor '{}' ({})", kill.name, kill.detail));
    }
    if !out.is_empty() {
        return out;
    }

    match assessment {
        Assessment::Favorable => {
            out.push("Advance to drill-target definition".to_string());
            for item in supportive.iter().filter(|s| s.strength > STRONG_EVIDENCE_THRESHOLD) {
                out.push(format!("Use {} to site the first hole", item.name));
            }
        }
        Assessment::Marginal | Assessment::Unfavorable => {
            let seen: Vec<&str> = supportive.iter().map(|s| s.name.as_str()).collect();
            for missing in playbook.supportive().iter().filter(|s| !seen.contains(&s.name)) {
                out.push(format!("Acquire data for {}: {}", missing.name, missing.description));
            }
            if assessment == Assessment::Unfavorable && out.is_empty() {
                out.push("Supportive evidence is weak; hold at reconnaissance".to_string());
            }
        }
    }
    out
}

fn risk_factors(mandatory: &MandatoryOutcome, kills: &KillOutcome, supportive: &[SupportiveItem]) -> Vec<String> {
    let mut out: Vec<String> = mandatory
        .results
        .iter()
        .filter(|r| r.passed && r.certainty < LOW_CERTAINTY)
        .map(|r| format!("'{}' rests on low-certainty data ({:.2})", r.name, r.certainty))
        .collect();
    out.extend(
        kills
            .triggered
            .iter()
            .map(|k| format!("{}: {}", k.description, k.detail)),
    );
    if supportive.len() < 2 {
        out.push(format!("Thin supportive evidence base ({} items)", supportive.len()));
    }
    out
}
