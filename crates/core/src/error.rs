//! Session error model.

use thiserror::Error;

/// Result type used across the session layer.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-level error.
///
/// These never reach the navigation path: corrupt payloads and storage
/// failures are recovered locally as the logged-out state, with the error
/// emitted as a diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Persisted session payload exists but is not parseable.
    #[error("corrupt session payload: {0}")]
    Corrupt(String),

    /// The storage backend failed to read or write.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl SessionError {
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::Corrupt(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
