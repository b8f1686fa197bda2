//! Compatibility result type definitions

use serde::Serialize;
use std::fmt;

/// Compatibility tier, best first.
///
/// `Perfect` only comes out of the key and tempo classifiers (identical inputs);
/// the overall tier tops out at `Excellent`. `Unknown` marks unparsable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompatibilityLabel {
    Perfect,
    Excellent,
    VeryGood,
    Good,
    Fair,
    Acceptable,
    Poor,
    Unknown,
}

impl CompatibilityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityLabel::Perfect => "perfect",
            CompatibilityLabel::Excellent => "excellent",
            CompatibilityLabel::VeryGood => "very-good",
            CompatibilityLabel::Good => "good",
            CompatibilityLabel::Fair => "fair",
            CompatibilityLabel::Acceptable => "acceptable",
            CompatibilityLabel::Poor => "poor",
            CompatibilityLabel::Unknown => "unknown",
        }
    }

    /// Human-readable description of an overall tier.
    pub fn description(&self) -> &'static str {
        super::verdict::describe_tier(self.as_str())
    }
}

impl fmt::Display for CompatibilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One axis of a comparison (key or tempo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    pub label: CompatibilityLabel,
    /// 0-100
    pub score: u8,
    pub reason: String,
}

impl Compatibility {
    pub fn new(label: CompatibilityLabel, score: u8, reason: impl Into<String>) -> Self {
        Self {
            label,
            score,
            reason: reason.into(),
        }
    }

    /// Zero-score result for input that could not be parsed.
    pub fn unknown(reason: impl Into<String>) -> Self {
        Self::new(CompatibilityLabel::Unknown, 0, reason)
    }

    pub fn is_unknown(&self) -> bool {
        self.label == CompatibilityLabel::Unknown
    }
}

/// Full result of comparing two (key, tempo) pairs.
///
/// # Fields
/// - `key`, `tempo`: per-axis classifications
/// - `overall_score`: `round(key.score * 0.6 + tempo.score * 0.4)`
/// - `overall_label`: tier derived from `overall_score`
/// - `description`: fixed text for `overall_label`
/// - `advice`: one key tip followed by one tempo tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityVerdict {
    pub key: Compatibility,
    pub tempo: Compatibility,
    pub overall_score: u8,
    pub overall_label: CompatibilityLabel,
    pub description: String,
    pub advice: Vec<String>,
}
