//! Key compatibility classification
//!
//! Rules are a priority cascade, first match wins:
//! 1. either key unparsable → unknown (0)
//! 2. same key → perfect (100)
//! 3. relative major/minor → excellent (95)
//! 4. parallel major/minor → very-good (85)
//! 5. circle-of-fifths distance: 1 → good (80), 2 → fair (60), 3 → acceptable (40), else poor (20)
//!
//! Relative keys sit at distance 0, so rule 3 has to run before the distance table.

use tracing::debug;

use super::types::{Compatibility, CompatibilityLabel};
use crate::key::MusicalKey;

/// Classify two key strings.
///
/// ```
/// use keymix::{key_compatibility, CompatibilityLabel};
///
/// let result = key_compatibility("C Major", "Am");
/// assert_eq!(result.label, CompatibilityLabel::Excellent);
/// assert_eq!(result.score, 95);
/// assert_eq!(result.reason, "Relative major/minor keys");
/// ```
pub fn key_compatibility(key_a: &str, key_b: &str) -> Compatibility {
    let result = match (MusicalKey::parse(key_a), MusicalKey::parse(key_b)) {
        (Some(a), Some(b)) => classify_keys(&a, &b),
        _ => Compatibility::unknown("Invalid key data"),
    };
    debug!(key_a, key_b, label = %result.label, score = result.score, "classified keys");
    result
}

/// Classify two parsed keys.
pub fn classify_keys(a: &MusicalKey, b: &MusicalKey) -> Compatibility {
    if a == b {
        return Compatibility::new(CompatibilityLabel::Perfect, 100, "Same key");
    }
    if a.is_relative_of(b) {
        return Compatibility::new(CompatibilityLabel::Excellent, 95, "Relative major/minor keys");
    }
    if a.is_parallel_of(b) {
        return Compatibility::new(CompatibilityLabel::VeryGood, 85, "Parallel major/minor keys");
    }

    match a.circle_distance(b) {
        1 => Compatibility::new(
            CompatibilityLabel::Good,
            80,
            "Adjacent keys in circle of fifths",
        ),
        2 => Compatibility::new(
            CompatibilityLabel::Fair,
            60,
            "Two steps apart in circle of fifths",
        ),
        3 => Compatibility::new(
            CompatibilityLabel::Acceptable,
            40,
            "Three steps apart in circle of fifths",
        ),
        _ => Compatibility::new(
            CompatibilityLabel::Poor,
            20,
            "Keys are not harmonically related",
        ),
    }
}
