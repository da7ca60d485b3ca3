use clx_core::models::scorecard::{PillarContribution, PillarScores, ScorecardBreakdown};

use crate::weights::PILLAR_WEIGHTS;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        MIN_SCORE
    } else {
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Weighted sum of the five pillar scores, each clamped into 0–100.
pub fn calculate_overall_score(scores: &PillarScores) -> f64 {
    PILLAR_WEIGHTS
        .iter()
        .map(|&(pillar, weight)| clamp_score(scores.get(pillar)) * weight)
        .sum()
}

/// Per-pillar contributions alongside the overall score.
pub fn breakdown(scores: &PillarScores) -> ScorecardBreakdown {
    let pillars: Vec<PillarContribution> = PILLAR_WEIGHTS
        .iter()
        .map(|&(pillar, weight)| {
            let score = clamp_score(scores.get(pillar));
            PillarContribution {
                pillar,
                name: pillar.name().to_string(),
                score,
                weight,
                contribution: score * weight,
            }
        })
        .collect();
    let overall = pillars.iter().map(|p| p.contribution).sum();
    tracing::debug!(overall, "aggregated five-pillar scorecard");
    ScorecardBreakdown { overall, pillars }
}
