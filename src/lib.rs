pub mod compatibility;
pub mod engine;
pub mod error;
pub mod key;
pub mod ranking;
pub mod session;
pub mod source;
pub mod suggest;
pub mod tempo;

pub use compatibility::{
    compatibility_verdict, key_compatibility, tempo_compatibility, Compatibility,
    CompatibilityLabel, CompatibilityVerdict,
};
pub use engine::CompatibilityEngine;
pub use error::*;
pub use key::{Mode, MusicalKey};
pub use ranking::{filter_and_rank, RankedTrack, ScalarField, Track, TrackMetadata};
pub use session::Session;
pub use source::{CandidateSource, InMemorySource, SessionSource};
pub use suggest::{suggest_compatible_keys, KeySuggestion};
pub use tempo::Tempo;

/// Compare two tracks given as raw key and tempo strings.
/// This is the main entry point for the library.
pub fn compare(key_a: &str, tempo_a: &str, key_b: &str, tempo_b: &str) -> CompatibilityVerdict {
    compatibility_verdict(key_a, tempo_a, key_b, tempo_b)
}
