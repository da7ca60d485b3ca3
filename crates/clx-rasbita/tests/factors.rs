use std::collections::HashSet;

use clx_rasbita::devices::{DEVICE_MULTIPLIERS, MAX_MULTIPLIER, device_multiplier};
use clx_rasbita::factors::{RISK_FACTORS, Rating};
use clx_rasbita::risk_factor;

#[test]
fn factor_ids_are_unique() {
    let ids: HashSet<_> = RISK_FACTORS.iter().map(|f| f.id).collect();
    assert_eq!(ids.len(), RISK_FACTORS.len());
}

#[test]
fn ratings_are_within_one_to_five() {
    for factor in RISK_FACTORS {
        assert!((1..=5).contains(&factor.likelihood.get()), "{}", factor.id);
        assert!((1..=5).contains(&factor.impact.get()), "{}", factor.id);
    }
}

#[test]
fn ratings_clamp_out_of_range_values() {
    assert_eq!(Rating::new(0).get(), 1);
    assert_eq!(Rating::new(3).get(), 3);
    assert_eq!(Rating::new(9).get(), 5);
}

#[test]
fn lookup_ignores_case_and_separators() {
    assert_eq!(risk_factor("ransomware").map(|f| f.id), Some("ransomware"));
    assert_eq!(risk_factor(" Data-Breach ").map(|f| f.id), Some("data_breach"));
    assert_eq!(risk_factor("insider threat").map(|f| f.id), Some("insider_threat"));
    assert!(risk_factor("alien_invasion").is_none());
}

#[test]
fn max_multiplier_matches_table() {
    let max = DEVICE_MULTIPLIERS
        .iter()
        .map(|&(_, m)| m)
        .fold(f64::MIN, f64::max);
    assert_eq!(max, MAX_MULTIPLIER);
}

#[test]
fn unknown_device_uses_neutral_multiplier() {
    assert_eq!(device_multiplier("Server"), 1.5);
    assert_eq!(device_multiplier("medical device"), 1.5);
    assert_eq!(device_multiplier("toaster"), 1.0);
    assert_eq!(device_multiplier(""), 1.0);
}

#[test]
fn factors_serialize_with_plain_ratings() {
    let json = serde_json::to_value(risk_factor("phishing").unwrap()).unwrap();
    assert_eq!(json["likelihood"], 5);
    assert_eq!(json["impact"], 4);
}
