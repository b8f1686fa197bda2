//! Overall scoring, tier descriptions and mixing advice

use super::key_rules::key_compatibility;
use super::tempo_rules::tempo_compatibility;
use super::types::{Compatibility, CompatibilityLabel, CompatibilityVerdict};

const KEY_WEIGHT: f64 = 0.6;
const TEMPO_WEIGHT: f64 = 0.4;

/// Compare two (key, tempo) pairs.
///
/// ```
/// use keymix::{compatibility_verdict, CompatibilityLabel};
///
/// let verdict = compatibility_verdict("C Major", "120", "G Major", "122");
/// assert_eq!(verdict.key.score, 80);
/// assert_eq!(verdict.tempo.score, 95);
/// assert_eq!(verdict.overall_score, 86);
/// assert_eq!(verdict.overall_label, CompatibilityLabel::VeryGood);
/// assert_eq!(verdict.advice.len(), 2);
/// ```
pub fn compatibility_verdict(
    key_a: &str,
    tempo_a: &str,
    key_b: &str,
    tempo_b: &str,
) -> CompatibilityVerdict {
    combine(key_compatibility(key_a, key_b), tempo_compatibility(tempo_a, tempo_b))
}

/// Build a verdict from already classified key and tempo results.
pub fn combine(key: Compatibility, tempo: Compatibility) -> CompatibilityVerdict {
    let overall_score = overall_score(key.score, tempo.score);
    let overall_label = overall_label(overall_score);
    let advice = advisory_text(&key, &tempo);

    CompatibilityVerdict {
        key,
        tempo,
        overall_score,
        overall_label,
        description: overall_label.description().to_string(),
        advice,
    }
}

/// `round(key * 0.6 + tempo * 0.4)`, half rounding up.
pub fn overall_score(key_score: u8, tempo_score: u8) -> u8 {
    let weighted = f64::from(key_score) * KEY_WEIGHT + f64::from(tempo_score) * TEMPO_WEIGHT;
    weighted.round().clamp(0.0, 100.0) as u8
}

pub fn overall_label(score: u8) -> CompatibilityLabel {
    match score {
        90.. => CompatibilityLabel::Excellent,
        75..=89 => CompatibilityLabel::VeryGood,
        60..=74 => CompatibilityLabel::Good,
        40..=59 => CompatibilityLabel::Fair,
        25..=39 => CompatibilityLabel::Acceptable,
        _ => CompatibilityLabel::Poor,
    }
}

/// One key tip, then one tempo tip. Driven by the sub-scores, not the overall tier.
pub fn advisory_text(key: &Compatibility, tempo: &Compatibility) -> Vec<String> {
    let key_tip = if key.score >= 80 {
        "Keys mix naturally - blend freely without pitch adjustment"
    } else if key.score >= 60 {
        "Keys are related - consider using key lock for smoother blends"
    } else {
        "Keys may clash - use the Camelot wheel or key lock before blending"
    };

    let tempo_tip = if tempo.score >= 90 {
        "Tempos are perfectly matched"
    } else if tempo.score >= 70 {
        "Tempos are close - minimal adjustment needed"
    } else if tempo.reason.contains("double") {
        "Half/double tempo - try a creative transition such as a half-time drop"
    } else {
        "Use tempo sync or beatmatching to align the tracks"
    };

    vec![key_tip.to_string(), tempo_tip.to_string()]
}

/// Fixed description for an overall tier label. Anything else is "unknown".
pub fn describe_tier(label: &str) -> &'static str {
    match label {
        "excellent" => "Excellent match - these tracks will mix seamlessly",
        "very-good" => "Very good match - smooth transitions expected",
        "good" => "Good match - mixes well with minor adjustments",
        "fair" => "Fair match - mixing is possible with some care",
        "acceptable" => "Acceptable match - needs careful, skilled mixing",
        "poor" => "Poor match - difficult to mix harmoniously",
        _ => "Unknown compatibility",
    }
}
