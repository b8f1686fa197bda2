//! # Compatibility Module
//!
//! Scores how well two tracks mix, from their key and tempo metadata.
//!
//! ## Sub-modules
//! - `types` - CompatibilityLabel, Compatibility, CompatibilityVerdict
//! - `key_rules` - Key classifier (same / relative / parallel / circle distance)
//! - `tempo_rules` - Tempo classifier (exact / half-double / 3:2 / BPM difference)
//! - `verdict` - Weighted overall score, tiers, descriptions and advice
//!
//! ## Scores
//!
//! | Key relationship | Label | Score |
//! |---|---|---|
//! | Same key | perfect | 100 |
//! | Relative major/minor | excellent | 95 |
//! | Parallel major/minor | very-good | 85 |
//! | 1 step on the circle | good | 80 |
//! | 2 steps | fair | 60 |
//! | 3 steps | acceptable | 40 |
//! | further | poor | 20 |
//!
//! | Tempo relationship | Label | Score |
//! |---|---|---|
//! | Exact | perfect | 100 |
//! | 2:1 (±0.1) | excellent | 90 |
//! | 3:2 (±0.1) | good | 75 |
//! | ≤ 5 BPM apart | excellent | 95 |
//! | ≤ 10 | good | 80 |
//! | ≤ 20 | fair | 60 |
//! | ≤ 40 | acceptable | 40 |
//! | further | poor | 20 |
//!
//! Unparsable input on either axis gives `unknown` with score 0 on that axis only;
//! the other axis is still classified.
//!
//! ## Overall
//! `overall = round(key * 0.6 + tempo * 0.4)`, tiered at 90 / 75 / 60 / 40 / 25.
//!
//! ## Example
//! ```rust
//! use keymix::compatibility::{compatibility_verdict, CompatibilityLabel};
//!
//! let verdict = compatibility_verdict("Am", "124", "Unknown", "124");
//! assert_eq!(verdict.key.label, CompatibilityLabel::Unknown);
//! assert_eq!(verdict.tempo.label, CompatibilityLabel::Perfect);
//! assert_eq!(verdict.overall_score, 40);
//! ```

mod key_rules;
mod tempo_rules;
mod types;
mod verdict;

#[cfg(test)]
mod tests;

pub use key_rules::{classify_keys, key_compatibility};
pub use tempo_rules::{classify_tempos, tempo_compatibility};
pub use types::{Compatibility, CompatibilityLabel, CompatibilityVerdict};
pub use verdict::{
    advisory_text, combine, compatibility_verdict, describe_tier, overall_label, overall_score,
};
