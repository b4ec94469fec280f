//! Configuration resolution for the pantry CLI
//!
//! The target database is selected by a single `DATABASE_URL` environment
//! variable, with a CLI override winning over the environment and a fixed
//! local default when neither is set.

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

/// Environment variable naming the target database connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Connection string used when neither the CLI flag nor the environment
/// provides one.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/foods_dev";

/// Maintenance database used for CREATE DATABASE / DROP DATABASE.
pub const MAINTENANCE_DATABASE: &str = "postgres";

/// Default directory holding migration files.
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

/// Default directory holding seed SQL files.
pub const DEFAULT_SEEDS_DIR: &str = "seeds";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the target database
    pub database_url: String,

    /// Directory scanned for migration files
    pub migrations_dir: PathBuf,

    /// Directory scanned for seed SQL files
    pub seeds_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from CLI overrides and the environment.
    ///
    /// Precedence for the database URL: CLI flag, then `DATABASE_URL`,
    /// then the fixed local default.
    pub fn resolve(
        cli_url: Option<&str>,
        migrations_dir: Option<&str>,
        seeds_dir: Option<&str>,
    ) -> Self {
        let database_url = cli_url
            .map(String::from)
            .or_else(|| std::env::var(DATABASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Self {
            database_url,
            migrations_dir: PathBuf::from(migrations_dir.unwrap_or(DEFAULT_MIGRATIONS_DIR)),
            seeds_dir: PathBuf::from(seeds_dir.unwrap_or(DEFAULT_SEEDS_DIR)),
        }
    }

    /// Extract the database name from the connection string.
    ///
    /// The name is the final path segment of the URL, with any query
    /// parameters stripped.
    pub fn database_name(&self) -> CoreResult<&str> {
        let without_query = self
            .database_url
            .split_once('?')
            .map(|(head, _)| head)
            .unwrap_or(&self.database_url);

        // Skip over the scheme separator so a bare host without a path
        // segment is rejected rather than returning "localhost:5432".
        let after_scheme = without_query
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(without_query);

        match after_scheme.rsplit_once('/') {
            Some((_, name)) if !name.is_empty() => Ok(name),
            _ => Err(CoreError::InvalidDatabaseUrl {
                url: self.database_url.clone(),
                reason: "no database name in URL path".to_string(),
            }),
        }
    }

    /// Connection string for the maintenance database on the same server.
    ///
    /// Used by create/clean, which cannot run while connected to the
    /// database they are creating or dropping.
    pub fn admin_url(&self) -> CoreResult<String> {
        let name = self.database_name()?;
        // Query parameters are dropped for the maintenance connection;
        // they are tied to the target database, not the server.
        let without_query = self
            .database_url
            .split_once('?')
            .map(|(head, _)| head)
            .unwrap_or(&self.database_url);
        let stripped = without_query.strip_suffix(name).unwrap_or(without_query);
        Ok(format!("{stripped}{MAINTENANCE_DATABASE}"))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
