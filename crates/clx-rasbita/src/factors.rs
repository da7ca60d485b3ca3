//! Static table of feared risks with their likelihood and impact ratings.

use serde::Serialize;

/// A 1–5 rating. Out-of-range inputs are clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const fn new(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskFactor {
    pub id: &'static str,
    pub name: &'static str,
    pub likelihood: Rating,
    pub impact: Rating,
}

impl RiskFactor {
    const fn new(id: &'static str, name: &'static str, likelihood: u8, impact: u8) -> Self {
        Self {
            id,
            name,
            likelihood: Rating::new(likelihood),
            impact: Rating::new(impact),
        }
    }

    /// `likelihood × impact`, 1–25.
    pub const fn weighted(&self) -> u8 {
        self.likelihood.get() * self.impact.get()
    }
}

pub const RISK_FACTORS: &[RiskFactor] = &[
    RiskFactor::new("ransomware", "Ransomware Attack", 4, 5),
    RiskFactor::new("phishing", "Phishing / Credential Theft", 5, 4),
    RiskFactor::new("data_breach", "Patient Data Breach", 4, 5),
    RiskFactor::new("insider_threat", "Insider Threat", 3, 4),
    RiskFactor::new("malware", "Malware Infection", 4, 4),
    RiskFactor::new("unauthorized_access", "Unauthorized Access", 4, 4),
    RiskFactor::new("ddos", "Denial of Service", 3, 3),
    RiskFactor::new("device_theft", "Device Loss or Theft", 3, 4),
    RiskFactor::new("misconfiguration", "System Misconfiguration", 4, 3),
    RiskFactor::new("third_party", "Third-Party Vendor Compromise", 3, 4),
    RiskFactor::new("supply_chain", "Software Supply Chain Attack", 2, 5),
    RiskFactor::new("social_engineering", "Social Engineering", 4, 3),
    RiskFactor::new("unpatched_software", "Unpatched Software", 4, 4),
    RiskFactor::new("medical_device_tampering", "Medical Device Tampering", 2, 5),
    RiskFactor::new("natural_disaster", "Natural Disaster / Outage", 2, 4),
];

/// Look up a factor by identifier. Case, surrounding whitespace and
/// `-`/space separators are ignored.
pub fn risk_factor(id: &str) -> Option<&'static RiskFactor> {
    let id = id.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    RISK_FACTORS.iter().find(|f| f.id == id)
}

pub fn all_risk_factors() -> &'static [RiskFactor] {
    RISK_FACTORS
}
