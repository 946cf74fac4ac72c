//! TweetClean Error Types
//!
//! Centralized error handling for lexicon loading, uploads and storage.

use thiserror::Error;

/// Central error type for TweetClean
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Storage(#[from] rusqlite::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for TweetClean operations
pub type CleanResult<T> = Result<T, CleanError>;

impl CleanError {
    /// True when the caller sent something unusable, as opposed to a server fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CleanError::Upload(_) | CleanError::BadRequest(_) | CleanError::Decode(_)
        )
    }
}
