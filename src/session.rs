//! # Session Files
//!
//! A session is a YAML document naming a reference track and the candidates to
//! rank against it.
//!
//! ```yaml
//! reference:
//!   title: Strobe
//!   artist: deadmau5
//!   key: C Major
//!   tempo: 128
//! min-score: 60
//! limit: 10
//! candidates:
//!   - { title: Opus, artist: Eric Prydz, key: A Minor, tempo: 126 }
//!   - { title: Cola, artist: CamelPhat, key: F Minor, tempo: 122, label: Defected }
//! ```
//!
//! `min-score` and `limit` are optional. Candidate fields other than `key` and
//! `tempo` pass through to the output unchanged.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::KeymixError;
use crate::ranking::Track;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Session {
    pub reference: Track,
    #[serde(default)]
    pub min_score: Option<u8>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub candidates: Option<Vec<Track>>,
}

impl Session {
    pub fn from_yaml(content: &str) -> Result<Self, KeymixError> {
        serde_yaml::from_str(content).map_err(|e| KeymixError::SessionError(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, KeymixError> {
        let content = fs::read_to_string(path).map_err(|e| KeymixError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let session = Self::from_yaml(&content)?;
        debug!(
            path = %path.display(),
            candidates = session.candidates.as_ref().map_or(0, Vec::len),
            "loaded session"
        );
        Ok(session)
    }

    pub fn min_score(&self) -> u8 {
        self.min_score.unwrap_or(0)
    }
}
