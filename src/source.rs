//! Candidate sources.
//!
//! Where candidates come from (catalog search, recommendation services, a
//! playlist file) is not the scorer's concern. Each origin implements
//! [`CandidateSource`] and the engine ranks whatever it returns.

use tracing::debug;

use crate::error::KeymixError;
use crate::ranking::Track;
use crate::session::Session;

pub trait CandidateSource {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Produce candidates for the given reference track.
    fn fetch_candidates(&self, reference: &Track) -> Result<Vec<Track>, KeymixError>;
}

/// A fixed list of tracks held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    tracks: Vec<Track>,
}

impl InMemorySource {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

impl CandidateSource for InMemorySource {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn fetch_candidates(&self, _reference: &Track) -> Result<Vec<Track>, KeymixError> {
        Ok(self.tracks.clone())
    }
}

/// The `candidates` list of a session file. A session without one is a caller
/// error, not an empty result.
#[derive(Debug, Clone, Copy)]
pub struct SessionSource<'a> {
    session: &'a Session,
}

impl<'a> SessionSource<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl CandidateSource for SessionSource<'_> {
    fn name(&self) -> &str {
        "session"
    }

    fn fetch_candidates(&self, _reference: &Track) -> Result<Vec<Track>, KeymixError> {
        let candidates = self.session.candidates.as_ref().ok_or_else(|| {
            KeymixError::InvalidArgument("session has no candidate list".to_string())
        })?;
        debug!(count = candidates.len(), "loaded session candidates");
        Ok(candidates.clone())
    }
}
