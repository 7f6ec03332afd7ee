//! Common error types for vidlist

use thiserror::Error;

/// Common result type for vidlist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by validation and the video repository
#[derive(Error, Debug)]
pub enum Error {
    /// URL fails the watch-URL checks (prefix, query presence, strict
    /// parse, or missing/empty `v` parameter)
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    /// A video with the same derived identifier already exists
    #[error("Video already stored: {0}")]
    Duplicate(String),

    /// Detail lookup for a nonexistent identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
