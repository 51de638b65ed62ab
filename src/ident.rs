//! Display identity derivation and orientation helpers.

use std::{cmp::Ordering, fmt};

/// Derive a short, human-friendly identifier from a device interface path.
///
/// For a hash-delimited path such as `\\?\DISPLAY#GSM5BBB#4&1a2b3c&0&UID123#{...}`
/// this yields `GSM5BBB_4&1a2b3c&0&UID123` (the vendor/model segment joined
/// with the instance segment). Paths without enough hash segments fall back
/// to the last backslash-delimited segment, and `UNKNOWN` when even that is
/// empty.
///
/// The result is not guaranteed to be unique: two displays of the same model
/// on the same connector instance can collide. Downstream consumers depend on
/// this exact derivation, so it is kept as-is.
pub fn derive_simple_id(device_id: &str) -> String {
    let parts: Vec<&str> = device_id.split('#').collect();
    if parts.len() >= 3 {
        return format!("{}_{}", parts[1], parts[2]);
    }

    match device_id.rsplit('\\').next() {
        Some(tail) if !tail.is_empty() => tail.to_owned(),
        _ => "UNKNOWN".to_owned(),
    }
}

/// How a display's current pixel geometry is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    /// The lowercase form used in folder-name suggestions.
    pub fn folder_word(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Landscape => "Landscape",
            Self::Portrait => "Portrait",
            Self::Square => "Square",
        };
        f.write_str(name)
    }
}

/// Classify a display by its current pixel geometry.
///
/// This looks only at width versus height. A rotated display already reports
/// swapped dimensions, so the raw rotation code is deliberately not consulted
/// here; the report shows both side by side.
pub fn classify_orientation(width: u32, height: u32) -> Orientation {
    match width.cmp(&height) {
        Ordering::Greater => Orientation::Landscape,
        Ordering::Less => Orientation::Portrait,
        Ordering::Equal => Orientation::Square,
    }
}

/// Convert the OS rotation code to a readable name.
pub fn orientation_label(code: u32) -> String {
    match code {
        0 => "Landscape (0°)".to_owned(),
        1 => "Portrait (90°)".to_owned(),
        2 => "Landscape Flipped (180°)".to_owned(),
        3 => "Portrait Flipped (270°)".to_owned(),
        other => format!("Unknown ({other}°)"),
    }
}
