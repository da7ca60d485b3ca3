use clx_core::models::risk::{RecognizedRisk, RiskAssessment, RiskLevel};

use crate::devices::{device_multiplier, known_multiplier};
use crate::error::RasbitaError;
use crate::factors::{RiskFactor, risk_factor};

/// Five worst-case risks (5 × 25) on the highest-multiplier device (1.5).
pub const MAX_THEORETICAL_SCORE: f64 = 187.5;

/// Recognized factors in input order, each counted once, plus the
/// identifiers that matched nothing.
fn partition<S: AsRef<str>>(risk_ids: &[S]) -> (Vec<&'static RiskFactor>, Vec<String>) {
    let mut recognized: Vec<&'static RiskFactor> = Vec::new();
    let mut ignored = Vec::new();
    for id in risk_ids {
        let id = id.as_ref();
        match risk_factor(id) {
            Some(factor) => {
                if !recognized.iter().any(|f| f.id == factor.id) {
                    recognized.push(factor);
                }
            }
            None => ignored.push(id.to_string()),
        }
    }
    (recognized, ignored)
}

fn rescale(factors: &[&RiskFactor], multiplier: f64) -> u8 {
    let total: u32 = factors.iter().map(|f| u32::from(f.weighted())).sum();
    let scaled = f64::from(total) * multiplier / MAX_THEORETICAL_SCORE * 100.0;
    scaled.round().clamp(0.0, 100.0) as u8
}

/// Risk score in 0–100 for a device exposed to `risk_ids`.
///
/// Unknown identifiers are skipped and an unknown device type scores with a
/// multiplier of 1.0. `_device_count` is accepted for call-site
/// compatibility and does not affect the score.
pub fn calculate_device_risk_score<S: AsRef<str>>(
    risk_ids: &[S],
    device_type: &str,
    _device_count: u32,
) -> u8 {
    let (recognized, ignored) = partition(risk_ids);
    if !ignored.is_empty() {
        tracing::debug!(?ignored, "ignoring unknown risk identifiers");
    }
    rescale(&recognized, device_multiplier(device_type))
}

/// Same arithmetic as [`calculate_device_risk_score`], but unknown risk
/// identifiers and device types are errors.
pub fn calculate_device_risk_score_strict<S: AsRef<str>>(
    risk_ids: &[S],
    device_type: &str,
    _device_count: u32,
) -> Result<u8, RasbitaError> {
    let multiplier = known_multiplier(device_type)
        .ok_or_else(|| RasbitaError::UnknownDeviceType(device_type.to_string()))?;
    let (recognized, ignored) = partition(risk_ids);
    if let Some(id) = ignored.into_iter().next() {
        return Err(RasbitaError::UnknownRisk(id));
    }
    Ok(rescale(&recognized, multiplier))
}

/// Band thresholds at 20/40/60/80; each threshold belongs to the higher band.
pub fn get_risk_level_from_score(score: u8) -> RiskLevel {
    match score {
        0..20 => RiskLevel::VeryLow,
        20..40 => RiskLevel::Low,
        40..60 => RiskLevel::Medium,
        60..80 => RiskLevel::High,
        _ => RiskLevel::VeryHigh,
    }
}

/// Score plus everything needed to explain it in a report.
pub fn assess<S: AsRef<str>>(risk_ids: &[S], device_type: &str, device_count: u32) -> RiskAssessment {
    let (recognized, ignored) = partition(risk_ids);
    let multiplier = device_multiplier(device_type);
    let score = rescale(&recognized, multiplier);

    let risks = recognized
        .iter()
        .map(|f| RecognizedRisk {
            id: f.id.to_string(),
            name: f.name.to_string(),
            likelihood: f.likelihood.get(),
            impact: f.impact.get(),
            weighted: f.weighted(),
        })
        .collect();

    tracing::debug!(
        score,
        device_type,
        recognized = recognized.len(),
        ignored = ignored.len(),
        "assessed device risk"
    );

    RiskAssessment {
        score,
        level: get_risk_level_from_score(score),
        device_type: device_type.to_string(),
        device_multiplier: multiplier,
        device_count,
        risks,
        ignored,
    }
}
