//! Error types for pantry-migrate

use pantry_core::CoreError;
use pantry_db::DbError;
use thiserror::Error;

/// Migration runner errors
#[derive(Error, Debug)]
pub enum MigrateError {
    /// M001: Ledger names a version whose file no longer exists
    #[error(
        "[M001] No migration file for version '{version}'; available files: {}",
        format_available(.available)
    )]
    MigrationFileNotFound {
        version: String,
        available: Vec<String>,
    },

    /// M002: Temp SQL file could not be written
    #[error("[M002] Failed to stage SQL for '{version}': {source}")]
    StagingFailed {
        version: String,
        source: std::io::Error,
    },

    /// Migration file or section problem
    #[error(transparent)]
    Core(#[from] CoreError),

    /// External database command problem
    #[error(transparent)]
    Db(#[from] DbError),
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "(none)".to_string()
    } else {
        available.join(", ")
    }
}

/// Result type alias for MigrateError
pub type MigrateResult<T> = Result<T, MigrateError>;
