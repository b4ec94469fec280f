//! Error types for pantry-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Command exited with a non-zero status (D001)
    #[error("[D001] Database command failed: {message}")]
    CommandFailed { message: String, stderr: String },

    /// Command could not be spawned at all (D002)
    #[error("[D002] Failed to spawn '{program}': {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    /// Command produced non-UTF-8 output (D003)
    #[error("[D003] Command output is not valid UTF-8: {0}")]
    OutputNotUtf8(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
