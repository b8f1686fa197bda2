//! # Compatibility Engine
//!
//! One entry point for the three things callers ask for: compare two tracks,
//! rank candidates against a reference, and suggest compatible keys.
//!
//! The engine holds only the 24-key table, built once in [`CompatibilityEngine::new`]
//! and never mutated, so a single instance can be shared across threads freely.
//!
//! ## Example
//! ```rust
//! use keymix::{CompatibilityEngine, InMemorySource, Track};
//!
//! let engine = CompatibilityEngine::new();
//! let reference = Track::new("Am", "124");
//! let source = InMemorySource::new(vec![Track::new("C", "124"), Track::new("F#", "90")]);
//!
//! let ranked = engine.rank_from_source(&reference, &source, 50)?;
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].compatibility.overall_score, 97);
//! # Ok::<(), keymix::KeymixError>(())
//! ```

use tracing::{debug, info};

use crate::compatibility::{compatibility_verdict, CompatibilityVerdict};
use crate::error::KeymixError;
use crate::key::MusicalKey;
use crate::ranking::{filter_and_rank, RankedTrack, Track, TrackMetadata};
use crate::session::Session;
use crate::source::{CandidateSource, SessionSource};
use crate::suggest::{suggest_from_table, KeySuggestion};

#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    keys: Vec<MusicalKey>,
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CompatibilityEngine {
    pub fn new() -> Self {
        Self {
            keys: MusicalKey::all().collect(),
        }
    }

    /// Every key the engine knows, majors then minors, each in circle order.
    pub fn keys(&self) -> &[MusicalKey] {
        &self.keys
    }

    pub fn compare<A, B>(&self, reference: &A, candidate: &B) -> CompatibilityVerdict
    where
        A: TrackMetadata + ?Sized,
        B: TrackMetadata + ?Sized,
    {
        compatibility_verdict(
            reference.key(),
            reference.tempo(),
            candidate.key(),
            candidate.tempo(),
        )
    }

    /// Rank an optional candidate list. `None` is a caller error; an empty list is not.
    pub fn rank<R, T>(
        &self,
        reference: &R,
        candidates: Option<&[T]>,
        min_score: u8,
    ) -> Result<Vec<RankedTrack<T>>, KeymixError>
    where
        R: TrackMetadata + ?Sized,
        T: TrackMetadata + Clone,
    {
        let candidates = candidates.ok_or_else(|| {
            KeymixError::InvalidArgument("candidate list is missing".to_string())
        })?;
        Ok(filter_and_rank(reference, candidates, min_score))
    }

    pub fn rank_from_source(
        &self,
        reference: &Track,
        source: &dyn CandidateSource,
        min_score: u8,
    ) -> Result<Vec<RankedTrack<Track>>, KeymixError> {
        let candidates = source.fetch_candidates(reference)?;
        debug!(source = source.name(), count = candidates.len(), "fetched candidates");
        self.rank(reference, Some(candidates.as_slice()), min_score)
    }

    /// Rank a session's candidates using its own `min-score`, truncated to its `limit`.
    pub fn rank_session(&self, session: &Session) -> Result<Vec<RankedTrack<Track>>, KeymixError> {
        let mut ranked = self.rank_from_source(
            &session.reference,
            &SessionSource::new(session),
            session.min_score(),
        )?;
        if let Some(limit) = session.limit {
            ranked.truncate(limit);
        }
        info!(
            reference = %session.reference.display_name(),
            matches = ranked.len(),
            "ranked session"
        );
        Ok(ranked)
    }

    pub fn suggest(&self, reference_key: &str) -> Vec<KeySuggestion> {
        suggest_from_table(&self.keys, reference_key)
    }
}
