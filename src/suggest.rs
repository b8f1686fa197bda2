//! Key suggestions: which keys mix well with a given key.
//!
//! Relative key first (score 95), then the four keys one step either side on the
//! circle of fifths (score 80), capped at [`MAX_SUGGESTIONS`]. Keys are reported
//! in canonical sharp spelling, one entry per key.

use serde::Serialize;
use tracing::debug;

use crate::key::MusicalKey;

pub const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySuggestion {
    pub key: MusicalKey,
    pub reason: &'static str,
    pub score: u8,
}

/// Suggest keys compatible with `reference`. Invalid input gives an empty list.
///
/// ```
/// use keymix::suggest_compatible_keys;
///
/// let suggestions = suggest_compatible_keys("C Major");
/// let keys: Vec<String> = suggestions.iter().map(|s| s.key.to_string()).collect();
/// assert_eq!(keys, vec!["Am", "G", "F", "Em", "Dm"]);
/// assert!(suggest_compatible_keys("Unknown").is_empty());
/// ```
pub fn suggest_compatible_keys(reference: &str) -> Vec<KeySuggestion> {
    let table: Vec<MusicalKey> = MusicalKey::all().collect();
    suggest_from_table(&table, reference)
}

/// Same as [`suggest_compatible_keys`], over a prebuilt key table.
pub fn suggest_from_table(table: &[MusicalKey], reference: &str) -> Vec<KeySuggestion> {
    let Some(reference_key) = MusicalKey::parse(reference) else {
        debug!(reference, "no suggestions for invalid key");
        return Vec::new();
    };
    let position = reference_key.circle_position();
    let up = (position + 1) % 12;
    let down = (position + 11) % 12;

    let relatives = table
        .iter()
        .filter(|key| key.circle_position() == position && **key != reference_key)
        .map(|&key| KeySuggestion {
            key,
            reason: "Relative major/minor",
            score: 95,
        });
    let neighbours = table
        .iter()
        .filter(|key| key.circle_position() == up || key.circle_position() == down)
        .map(|&key| KeySuggestion {
            key,
            reason: "Adjacent in circle of fifths",
            score: 80,
        });

    relatives.chain(neighbours).take(MAX_SUGGESTIONS).collect()
}
