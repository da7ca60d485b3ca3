use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative band for a 0–100 RASBITA risk score.
///
/// Variants are declared in increasing severity, so `Ord` follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A feared risk that matched the static factor table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecognizedRisk {
    pub id: String,
    pub name: String,
    pub likelihood: u8,
    pub impact: u8,
    /// `likelihood × impact`, before the device multiplier.
    pub weighted: u8,
}

/// Result of scoring one device against a set of feared risks. Stored as-is
/// in the RASBITA report JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub device_type: String,
    pub device_multiplier: f64,
    pub device_count: u32,
    pub risks: Vec<RecognizedRisk>,
    /// Risk identifiers that were not in the factor table.
    pub ignored: Vec<String>,
}
