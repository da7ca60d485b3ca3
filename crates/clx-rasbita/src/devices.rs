//! Device-type multipliers applied to the summed risk.

pub const DEFAULT_MULTIPLIER: f64 = 1.0;

pub const DEVICE_MULTIPLIERS: &[(&str, f64)] = &[
    ("server", 1.5),
    ("medical_device", 1.5),
    ("network_device", 1.4),
    ("iot", 1.4),
    ("mobile", 1.3),
    ("laptop", 1.2),
    ("workstation", 1.0),
    ("printer", 0.8),
];

/// Largest multiplier in [`DEVICE_MULTIPLIERS`].
pub const MAX_MULTIPLIER: f64 = 1.5;

fn key(device_type: &str) -> String {
    device_type.trim().to_ascii_lowercase().replace([' ', '-'], "_")
}

/// Multiplier for a known device type.
pub fn known_multiplier(device_type: &str) -> Option<f64> {
    let key = key(device_type);
    DEVICE_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, m)| m)
}

/// Multiplier for `device_type`, [`DEFAULT_MULTIPLIER`] when unknown.
pub fn device_multiplier(device_type: &str) -> f64 {
    known_multiplier(device_type).unwrap_or(DEFAULT_MULTIPLIER)
}
