//! Tempo compatibility classification
//!
//! Ratio checks (2:1, then 3:2) run before the absolute-difference tiers, so
//! 70 vs 140 is a half/double pair rather than a 70 BPM gap. Zero and negative
//! tempos skip the ratio checks.

use tracing::debug;

use super::types::{Compatibility, CompatibilityLabel};
use crate::tempo::Tempo;

/// How close a tempo ratio must be to 2.0 or 1.5 to count as that relationship.
const RATIO_TOLERANCE: f64 = 0.1;

/// Classify two tempo strings.
///
/// ```
/// use keymix::{tempo_compatibility, CompatibilityLabel};
///
/// let result = tempo_compatibility("120", "123");
/// assert_eq!(result.label, CompatibilityLabel::Excellent);
/// assert_eq!(result.score, 95);
/// assert_eq!(result.reason, "Within 5 BPM (3 BPM difference)");
/// ```
pub fn tempo_compatibility(tempo_a: &str, tempo_b: &str) -> Compatibility {
    let result = match (Tempo::parse(tempo_a), Tempo::parse(tempo_b)) {
        (Some(a), Some(b)) => classify_tempos(a, b),
        _ => Compatibility::unknown("Invalid BPM data"),
    };
    debug!(tempo_a, tempo_b, label = %result.label, score = result.score, "classified tempos");
    result
}

/// Classify two parsed tempos.
pub fn classify_tempos(a: Tempo, b: Tempo) -> Compatibility {
    let (a, b) = (a.bpm(), b.bpm());
    if a == b {
        return Compatibility::new(CompatibilityLabel::Perfect, 100, "Exact BPM match");
    }

    let diff = a.abs_diff(b);

    // Ratios are only meaningful between positive tempos
    if a.min(b) > 0 {
        let ratio = a.max(b) as f64 / a.min(b) as f64;
        if (ratio - 2.0).abs() < RATIO_TOLERANCE {
            return Compatibility::new(
                CompatibilityLabel::Excellent,
                90,
                "Half/double BPM relationship",
            );
        }
        if (ratio - 1.5).abs() < RATIO_TOLERANCE {
            return Compatibility::new(CompatibilityLabel::Good, 75, "3/2 BPM relationship");
        }
    }

    match diff {
        0..=5 => Compatibility::new(
            CompatibilityLabel::Excellent,
            95,
            format!("Within 5 BPM ({} BPM difference)", diff),
        ),
        6..=10 => Compatibility::new(
            CompatibilityLabel::Good,
            80,
            format!("Within 10 BPM ({} BPM difference)", diff),
        ),
        11..=20 => Compatibility::new(
            CompatibilityLabel::Fair,
            60,
            format!("Within 20 BPM ({} BPM difference)", diff),
        ),
        21..=40 => Compatibility::new(
            CompatibilityLabel::Acceptable,
            40,
            format!("{} BPM difference", diff),
        ),
        _ => Compatibility::new(
            CompatibilityLabel::Poor,
            20,
            format!("Large BPM difference ({} BPM)", diff),
        ),
    }
}
