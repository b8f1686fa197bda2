//! # Error Types
//!
//! This module defines the error type for the keymix library.
//!
//! Malformed musical data (an unparsable key such as `"H major"`, a tempo such as
//! `"fast"`, or the `"Unknown"` sentinel) is **not** an error: it degrades to an
//! `unknown` classification with a zero score. Errors are reserved for structural
//! faults in what the caller hands over.
//!
//! ## Error Types
//! - `InvalidArgument` - A required structural input is missing (e.g. no candidate list)
//! - `SessionError` - A session file is not valid YAML or has the wrong shape
//! - `Io` - A session file could not be read
//!
//! ## Usage
//! ```rust
//! use keymix::{CompatibilityEngine, KeymixError, Session};
//!
//! let session = Session::from_yaml("reference: { key: C, tempo: '120' }").unwrap();
//! match CompatibilityEngine::new().rank_session(&session) {
//!     Ok(ranked) => println!("{} matches", ranked.len()),
//!     Err(KeymixError::InvalidArgument(message)) => eprintln!("bad request: {}", message),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeymixError {
    /// A required structural argument was missing or malformed.
    ///
    /// # Example
    /// ```
    /// # use keymix::KeymixError;
    /// let err = KeymixError::InvalidArgument("candidate list is missing".to_string());
    /// assert_eq!(err.to_string(), "Invalid argument: candidate list is missing");
    /// ```
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The session document could not be deserialized.
    ///
    /// # Example
    /// ```
    /// # use keymix::KeymixError;
    /// let err = KeymixError::SessionError("missing field `reference`".to_string());
    /// assert_eq!(err.to_string(), "Invalid session: missing field `reference`");
    /// ```
    #[error("Invalid session: {0}")]
    SessionError(String),

    /// Reading a session file from disk failed.
    #[error("Cannot read '{path}': {message}")]
    Io { path: String, message: String },
}
