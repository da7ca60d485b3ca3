//! Field normalization and fixed-width slicing.
//!
//! Every slice folded into an identifier has a fixed width. Slices are padded
//! with `0`, so a slice alone cannot tell `SVC` from `SVC0`; the digest tail
//! (see [`digest_tail`]) covers the full canonical values and separates them.

use sha2::{Digest, Sha256};

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Unicode alphanumerics only, uppercased. Punctuation and whitespace drop.
pub fn canonical(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}

fn base36(mut n: u32) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

/// [`canonical`] mapped into `[A-Z0-9]`: ASCII characters pass through,
/// anything else becomes the base-36 form of its code point.
pub fn normalize(value: &str) -> String {
    canonical(value)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_string()
            } else {
                base36(u32::from(c))
            }
        })
        .collect()
}

/// First `width` characters, right-padded with `0`.
pub fn leading(normalized: &str, width: usize) -> String {
    let mut out: String = normalized.chars().take(width).collect();
    pad_right(&mut out, width);
    out
}

/// Last `width` characters, left-padded with `0`.
pub fn trailing(normalized: &str, width: usize) -> String {
    let len = normalized.chars().count();
    let tail: String = normalized.chars().skip(len.saturating_sub(width)).collect();
    format!("{tail:0>width$}")
}

pub fn pad_right(value: &mut String, width: usize) {
    while value.chars().count() < width {
        value.push('0');
    }
}

/// `width` base-36 characters of SHA-256 over the canonical `values`, joined
/// with a separator that cannot occur inside a canonical value.
pub fn digest_tail(values: &[&str], width: usize) -> String {
    let mut hasher = Sha256::new();
    for value in values {
        hasher.update(canonical(value).as_bytes());
        hasher.update(b"|");
    }
    let hash: [u8; 32] = hasher.finalize().into();
    hash.iter()
        .cycle()
        .take(width)
        .map(|&b| BASE36[usize::from(b) % 36] as char)
        .collect()
}
