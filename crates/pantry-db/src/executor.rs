//! External command execution
//!
//! All database access goes through an external client process (psql).
//! The executor seam exists so the ledger and runner can be tested with
//! scripted outputs instead of a live database.

use crate::error::{DbError, DbResult};
use async_trait::async_trait;
use tokio::process::Command;

/// Captured output of a completed command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Command execution seam.
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `program` with `args` once, fully buffering output.
    ///
    /// A non-zero exit status is always an error. Non-empty stderr on a
    /// zero exit status is a warning only and does not fail the call.
    /// There is no retry at this layer.
    async fn execute(&self, program: &str, args: &[String]) -> DbResult<CommandOutput>;
}

/// Executor that spawns one real OS process per call.
#[derive(Debug, Default)]
pub struct ProcessExecutor;

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, program: &str, args: &[String]) -> DbResult<CommandOutput> {
        log::debug!("Executing: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| DbError::SpawnFailed {
                program: program.to_string(),
                source: e,
            })?;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| DbError::OutputNotUtf8(e.to_string()))?;
        let stderr = String::from_utf8(output.stderr)
            .map_err(|e| DbError::OutputNotUtf8(e.to_string()))?;

        if !output.status.success() {
            return Err(DbError::CommandFailed {
                message: format!("{program} exited with {}", output.status),
                stderr,
            });
        }

        if !stderr.trim().is_empty() {
            log::warn!("{program} wrote to stderr on success: {}", stderr.trim());
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
