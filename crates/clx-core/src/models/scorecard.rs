use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The five assessment categories combined into the overall posture score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Pillar {
    Qualitative,
    Quantitative,
    CostBenefit,
    Governance,
    Architecture,
}

impl Pillar {
    pub const ALL: [Pillar; 5] = [
        Pillar::Qualitative,
        Pillar::Quantitative,
        Pillar::CostBenefit,
        Pillar::Governance,
        Pillar::Architecture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Qualitative => "qualitative",
            Pillar::Quantitative => "quantitative",
            Pillar::CostBenefit => "cost_benefit",
            Pillar::Governance => "governance",
            Pillar::Architecture => "architecture",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pillar::Qualitative => "Qualitative Assessment",
            Pillar::Quantitative => "Quantitative Analysis",
            Pillar::CostBenefit => "RASBITA Cost-Benefit Analysis",
            Pillar::Governance => "RASBITA Governance & Management",
            Pillar::Architecture => "Architecture Threat Modeling & Application Security",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pillar {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Pillar::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownPillar(s.to_string()))
    }
}

/// One 0–100 score per pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PillarScores {
    pub qualitative: f64,
    pub quantitative: f64,
    pub cost_benefit: f64,
    pub governance: f64,
    pub architecture: f64,
}

impl PillarScores {
    pub fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Qualitative => self.qualitative,
            Pillar::Quantitative => self.quantitative,
            Pillar::CostBenefit => self.cost_benefit,
            Pillar::Governance => self.governance,
            Pillar::Architecture => self.architecture,
        }
    }

    pub fn set(&mut self, pillar: Pillar, score: f64) {
        match pillar {
            Pillar::Qualitative => self.qualitative = score,
            Pillar::Quantitative => self.quantitative = score,
            Pillar::CostBenefit => self.cost_benefit = score,
            Pillar::Governance => self.governance = score,
            Pillar::Architecture => self.architecture = score,
        }
    }
}

impl From<[f64; 5]> for PillarScores {
    /// Scores in [`Pillar::ALL`] order.
    fn from(scores: [f64; 5]) -> Self {
        Self {
            qualitative: scores[0],
            quantitative: scores[1],
            cost_benefit: scores[2],
            governance: scores[3],
            architecture: scores[4],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PillarContribution {
    pub pillar: Pillar,
    pub name: String,
    pub score: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Overall score plus how each pillar got there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScorecardBreakdown {
    pub overall: f64,
    pub pillars: Vec<PillarContribution>,
}
