use std::sync::LazyLock;

use regex::Regex;

static UWA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^CLX-[A-Z0-9]{7}(-[A-Z0-9]{7}){5}$").expect("UWA pattern is valid")
});

/// Whether `candidate` has the exact shape of a generated UWA. Checks shape
/// only; it does not tell which entity produced it.
pub fn validate_uwa(candidate: &str) -> bool {
    UWA_PATTERN.is_match(candidate)
}
