//! Accessory catalogue.
//!
//! Fitting labels arrive as free text. They normalize into a small closed
//! catalogue, each entry carrying the equivalent straight-pipe length the
//! segmentation charges for it.

/// A recognized accessory, normalized from its free-text label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccessoryKind {
    DiverterValve30,
    DiverterValve45,
    StainlessSteelHose,
    RubberOrVinylHose,
    /// A pipe bend, charged proportionally to its angle (20 ft per 90°).
    Bend { angle_deg: f64 },
}

impl AccessoryKind {
    /// Normalize a free-text label. Matching is case-insensitive and
    /// tolerates surrounding text such as a degree suffix. Unrecognized
    /// labels and non-positive angles yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let norm = label.trim().to_lowercase();
        if norm.is_empty() {
            return None;
        }
        if norm.contains("diverter valve 30") {
            return Some(Self::DiverterValve30);
        }
        if norm.contains("diverter valve 45") {
            return Some(Self::DiverterValve45);
        }
        if norm.contains("stainless steel") {
            return Some(Self::StainlessSteelHose);
        }
        if norm.contains("rubber or vinyl hose") {
            return Some(Self::RubberOrVinylHose);
        }
        let angle = leading_number(&norm)?;
        (angle > 0.0).then_some(Self::Bend { angle_deg: angle })
    }

    /// Equivalent straight-pipe length, ft.
    pub fn equivalent_length_ft(&self) -> f64 {
        match self {
            Self::DiverterValve30 => 10.0,
            Self::DiverterValve45 => 20.0,
            Self::StainlessSteelHose => 3.0,
            Self::RubberOrVinylHose => 5.0,
            Self::Bend { angle_deg } => 20.0 * angle_deg / 90.0,
        }
    }
}

/// Leading numeric prefix of a label, so `"90°"` reads as 90.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}
