//! Error types for pantry-core

use thiserror::Error;

/// Core error type for pantry
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Migration name missing or empty
    #[error("[E001] Migration name must not be empty")]
    EmptyMigrationName,

    /// E002: Migration has no DOWN section
    #[error("[E002] Migration '{version}' has no -- DOWN section; rollback is not possible")]
    MissingDownSection { version: String },

    /// E003: Extracted SQL section is empty
    #[error("[E003] Migration '{version}' has an empty {direction} section")]
    EmptySection { version: String, direction: String },

    /// E004: Migrations directory could not be set up
    #[error("[E004] Failed to set up migrations directory '{path}': {source}")]
    MigrationsDirSetup {
        path: String,
        source: std::io::Error,
    },

    /// E005: IO error with file path context
    #[error("[E005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E006: Database URL could not be interpreted
    #[error("[E006] Invalid database URL '{url}': {reason}")]
    InvalidDatabaseUrl { url: String, reason: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
