use clx_uwa::location::{LocationSource, location_code, resolve};

#[test]
fn plus_code_is_extracted_without_separator() {
    assert_eq!(
        resolve("2X57+XH Cupertino"),
        ("2X57XH".to_string(), LocationSource::PlusCode)
    );
}

#[test]
fn long_plus_code_keeps_trailing_characters() {
    assert_eq!(location_code("Office at 849VCWC8+R9, Mountain View"), "CWC8R9");
}

#[test]
fn plus_code_match_is_case_insensitive() {
    assert_eq!(location_code("2x57+xh cupertino"), "2X57XH");
}

#[test]
fn arrow_override_wins_over_plus_code() {
    assert_eq!(
        resolve("2X57+XH Cupertino -> Site 42B"),
        ("ITE42B".to_string(), LocationSource::Override)
    );
}

#[test]
fn unicode_arrow_override_is_recognized() {
    assert_eq!(location_code("Main campus → HQ7"), "000HQ7");
}

#[test]
fn empty_override_falls_through() {
    let (_, source) = resolve("1 Infinite Loop ->   ");
    assert_eq!(source, LocationSource::Heuristic);
}

#[test]
fn heuristic_mixes_digits_and_initials() {
    assert_eq!(
        resolve("1 Infinite Loop, Cupertino CA"),
        ("1ILCC0".to_string(), LocationSource::Heuristic)
    );
}

#[test]
fn heuristic_takes_at_most_three_digits() {
    assert_eq!(location_code("12345 Elm Street"), "123ES0");
}

#[test]
fn heuristic_only_uses_leading_house_number() {
    assert_eq!(location_code("Suite 5, 100 Main Street"), "SMS000");
    assert_eq!(location_code("  42 Elm Street"), "42ES00");
}

#[test]
fn heuristic_codes_are_not_unique() {
    // Distinct addresses, same code: a known limitation of the fallback.
    assert_eq!(
        location_code("100 Main Street"),
        location_code("100 Maple Square")
    );
}

#[test]
fn codes_are_always_six_uppercase_alphanumerics() {
    for address in ["x", "2X57+XH", "a -> b", "    ", "München Straße 9"] {
        let code = location_code(address);
        assert_eq!(code.len(), 6, "{address:?} -> {code:?}");
        assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
