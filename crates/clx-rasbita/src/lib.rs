//! clx-rasbita
//!
//! RASBITA device risk scoring. Pure data and arithmetic: a static table of
//! feared risks, a static table of device multipliers, and the rescaling of
//! their product into a 0–100 score with a qualitative band.

pub mod devices;
pub mod error;
pub mod factors;
pub mod scoring;

pub use devices::device_multiplier;
pub use error::RasbitaError;
pub use factors::{RiskFactor, all_risk_factors, risk_factor};
pub use scoring::{
    MAX_THEORETICAL_SCORE, assess, calculate_device_risk_score,
    calculate_device_risk_score_strict, get_risk_level_from_score,
};
