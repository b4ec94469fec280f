//! psql client wrapper
//!
//! Builds the psql invocations used everywhere: quiet, tuples-only,
//! unaligned output, and ON_ERROR_STOP so a failing statement fails the
//! whole invocation instead of limping on.

use crate::error::DbResult;
use crate::executor::{CommandExecutor, CommandOutput};
use std::path::Path;
use std::sync::Arc;

/// Client program invoked for every database operation.
pub const PSQL_PROGRAM: &str = "psql";

/// psql client bound to a connection URL.
#[derive(Clone)]
pub struct PsqlClient {
    executor: Arc<dyn CommandExecutor>,
    url: String,
}

impl PsqlClient {
    pub fn new(executor: Arc<dyn CommandExecutor>, url: impl Into<String>) -> Self {
        Self {
            executor,
            url: url.into(),
        }
    }

    /// Connection URL this client targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// A client for a different URL sharing the same executor.
    pub fn with_url(&self, url: impl Into<String>) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            url: url.into(),
        }
    }

    /// Run a single SQL string, returning raw stdout (tuples-only,
    /// unaligned: one row per line, columns separated by `|`).
    pub async fn run_sql(&self, sql: &str) -> DbResult<String> {
        let output = self.run(&["-c".to_string(), sql.to_string()]).await?;
        Ok(output.stdout)
    }

    /// Run a SQL file, returning raw stdout.
    pub async fn run_file(&self, path: &Path) -> DbResult<String> {
        let output = self
            .run(&["-f".to_string(), path.display().to_string()])
            .await?;
        Ok(output.stdout)
    }

    async fn run(&self, tail: &[String]) -> DbResult<CommandOutput> {
        let mut args = vec![
            self.url.clone(),
            "-X".to_string(),
            "-q".to_string(),
            "-v".to_string(),
            "ON_ERROR_STOP=1".to_string(),
            "-t".to_string(),
            "-A".to_string(),
        ];
        args.extend_from_slice(tail);
        self.executor.execute(PSQL_PROGRAM, &args).await
    }
}

/// Quote a string for embedding in a SQL literal (single-quote doubling).
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
