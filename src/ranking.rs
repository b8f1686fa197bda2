//! # Candidate Ranking
//!
//! Scores a list of candidate tracks against a reference track, drops the ones
//! below a minimum overall score and orders the rest best first.
//!
//! ## Guarantees
//! - Each candidate is cloned untouched into a [`RankedTrack`] with its verdict
//!   attached alongside it, never merged into it.
//! - `min_score` is inclusive; anything above 100 returns nothing.
//! - Sorting is stable: equal scores keep their input order.
//! - An empty list, or one where nothing survives, gives an empty result.
//!
//! ## Example
//! ```rust
//! use keymix::{filter_and_rank, Track};
//!
//! let reference = Track::new("C Major", "120");
//! let candidates = vec![
//!     Track::new("F# Major", "180"),
//!     Track::new("G Major", "122"),
//!     Track::new("C Major", "120"),
//! ];
//!
//! let ranked = filter_and_rank(&reference, &candidates, 60);
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].track.key, "C Major");
//! assert_eq!(ranked[1].track.key, "G Major");
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, trace, warn};

use crate::compatibility::{compatibility_verdict, CompatibilityVerdict};

/// Anything that exposes a key string and a tempo string.
pub trait TrackMetadata {
    fn key(&self) -> &str;
    fn tempo(&self) -> &str;
}

/// A candidate record.
///
/// Only `key` and `tempo` are read. Every other field a session or catalog
/// provides is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "ScalarField::is_missing")]
    pub key: ScalarField,
    #[serde(default, skip_serializing_if = "ScalarField::is_missing")]
    pub tempo: ScalarField,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Track {
    pub fn new(key: impl Into<String>, tempo: impl Into<String>) -> Self {
        Self {
            key: ScalarField::from(key.into()),
            tempo: ScalarField::from(tempo.into()),
            ..Default::default()
        }
    }

    pub fn titled(mut self, title: impl Into<String>, artist: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.artist = Some(artist.into());
        self
    }

    /// "Artist - Title", or whichever of the two is present.
    pub fn display_name(&self) -> String {
        match (&self.artist, &self.title) {
            (Some(artist), Some(title)) => format!("{} - {}", artist, title),
            (None, Some(title)) => title.clone(),
            (Some(artist), None) => artist.clone(),
            (None, None) => "(untitled)".to_string(),
        }
    }
}

impl TrackMetadata for Track {
    fn key(&self) -> &str {
        self.key.as_str()
    }

    fn tempo(&self) -> &str {
        self.tempo.as_str()
    }
}

/// A scalar track field read as text but written back as it was given.
///
/// `tempo: 120` and `tempo: "120"` both read as `"120"`; the first is
/// serialized as the number `120` again. Null or a missing field reads as an
/// empty string, which classifies as unknown, and is left out on output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScalarField {
    text: String,
    raw: Value,
}

impl ScalarField {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The value as it appeared in the input.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn is_missing(&self) -> bool {
        self.raw.is_null()
    }
}

impl From<String> for ScalarField {
    fn from(text: String) -> Self {
        Self {
            raw: Value::String(text.clone()),
            text,
        }
    }
}

impl From<&str> for ScalarField {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl PartialEq<str> for ScalarField {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for ScalarField {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

impl Serialize for ScalarField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScalarField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let text = match &raw {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            other => {
                return Err(de::Error::custom(format!(
                    "expected a string or number, found {}",
                    other
                )))
            }
        };
        Ok(Self { text, raw })
    }
}

/// A candidate with its verdict against the reference track.
///
/// Serializes as `{"track": {...}, "compatibility": {...}}`, so a candidate's
/// own fields never collide with the verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTrack<T> {
    pub track: T,
    pub compatibility: CompatibilityVerdict,
}

impl<T> RankedTrack<T> {
    pub fn score(&self) -> u8 {
        self.compatibility.overall_score
    }
}

/// Score a single candidate against the reference.
pub fn score_candidate<R, T>(reference: &R, candidate: &T) -> RankedTrack<T>
where
    R: TrackMetadata + ?Sized,
    T: TrackMetadata + Clone,
{
    let compatibility = compatibility_verdict(
        reference.key(),
        reference.tempo(),
        candidate.key(),
        candidate.tempo(),
    );
    if compatibility.key.is_unknown() || compatibility.tempo.is_unknown() {
        warn!(
            key = candidate.key(),
            tempo = candidate.tempo(),
            "candidate has unusable key or tempo data, scoring it as unknown"
        );
    }
    trace!(
        key = candidate.key(),
        tempo = candidate.tempo(),
        score = compatibility.overall_score,
        "scored candidate"
    );
    RankedTrack {
        track: candidate.clone(),
        compatibility,
    }
}

/// Score every candidate, keep those at or above `min_score`, best first.
pub fn filter_and_rank<R, T>(reference: &R, candidates: &[T], min_score: u8) -> Vec<RankedTrack<T>>
where
    R: TrackMetadata + ?Sized,
    T: TrackMetadata + Clone,
{
    let mut ranked: Vec<RankedTrack<T>> = candidates
        .iter()
        .map(|candidate| score_candidate(reference, candidate))
        .filter(|ranked| ranked.score() >= min_score)
        .collect();

    // Vec::sort_by is stable, ties keep input order
    ranked.sort_by(|a, b| b.score().cmp(&a.score()));

    debug!(
        candidates = candidates.len(),
        kept = ranked.len(),
        min_score,
        "ranked candidates"
    );
    ranked
}
