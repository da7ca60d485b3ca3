//! Address → 6-character location code.
//!
//! Resolution order: an explicit arrow override, then an Open Location Code
//! ("Plus Code") found anywhere in the address, then a heuristic built from
//! the address text. The heuristic is not unique: two different street
//! addresses can share a code.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::{normalize, pad_right, trailing};

pub const LOCATION_CODE_LEN: usize = 6;

static PLUS_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([23456789CFGHJMPQRVWX]{4,8})\+([23456789CFGHJMPQRVWX]{2,3})\b")
        .expect("plus code pattern is valid")
});

/// How a location code was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    Override,
    PlusCode,
    Heuristic,
}

/// Derive the location code for `address`. Always [`LOCATION_CODE_LEN`]
/// characters of `[A-Z0-9]`.
pub fn location_code(address: &str) -> String {
    resolve(address).0
}

/// Like [`location_code`], also reporting which rule produced the code.
pub fn resolve(address: &str) -> (String, LocationSource) {
    if let Some(code) = arrow_override(address) {
        return (code, LocationSource::Override);
    }
    if let Some(code) = plus_code(address) {
        return (code, LocationSource::PlusCode);
    }
    tracing::debug!("no plus code in address, using heuristic location code");
    (heuristic(address), LocationSource::Heuristic)
}

fn arrow_override(address: &str) -> Option<String> {
    let idx = ["→", "->"]
        .iter()
        .filter_map(|arrow| address.rfind(arrow).map(|i| i + arrow.len()))
        .max()?;
    let target = normalize(&address[idx..]);
    if target.is_empty() {
        return None;
    }
    Some(trailing(&target, LOCATION_CODE_LEN))
}

fn plus_code(address: &str) -> Option<String> {
    let caps = PLUS_CODE.captures(address)?;
    let joined = format!("{}{}", &caps[1], &caps[2]).to_ascii_uppercase();
    Some(trailing(&joined, LOCATION_CODE_LEN))
}

/// Up to three digits of the leading house number, then word initials.
fn heuristic(address: &str) -> String {
    let mut code: String = address
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .take(3)
        .collect();

    let initials = address
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter_map(|word| word.chars().next())
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase());
    code.extend(initials);

    let mut code: String = code.chars().take(LOCATION_CODE_LEN).collect();
    pad_right(&mut code, LOCATION_CODE_LEN);
    code
}

