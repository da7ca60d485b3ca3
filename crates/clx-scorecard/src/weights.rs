use clx_core::models::scorecard::Pillar;

/// Pillar weights. Sum to 1.0.
pub const PILLAR_WEIGHTS: [(Pillar, f64); 5] = [
    (Pillar::Qualitative, 0.20),
    (Pillar::Quantitative, 0.25),
    (Pillar::CostBenefit, 0.25),
    (Pillar::Governance, 0.15),
    (Pillar::Architecture, 0.15),
];

pub fn weight(pillar: Pillar) -> f64 {
    PILLAR_WEIGHTS
        .iter()
        .find(|(p, _)| *p == pillar)
        .map_or(0.0, |&(_, w)| w)
}
