//! Test support: a scripted in-memory command executor
//!
//! `FakeExecutor` stands in for the psql process. It records every
//! invocation, emulates the ledger SQL against an in-memory set of
//! applied versions, and can be told to fail invocations matching a
//! pattern. This keeps ledger and runner tests hermetic.

use crate::error::{DbError, DbResult};
use crate::executor::{CommandExecutor, CommandOutput};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Mutex;

/// One recorded executor call.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// The SQL passed via `-c`, if any.
    pub fn sql(&self) -> Option<&str> {
        self.arg_after("-c")
    }

    /// The file path passed via `-f`, if any.
    pub fn file(&self) -> Option<&str> {
        self.arg_after("-f")
    }

    fn arg_after(&self, flag: &str) -> Option<&str> {
        let pos = self.args.iter().position(|a| a == flag)?;
        self.args.get(pos + 1).map(String::as_str)
    }
}

#[derive(Default)]
struct FakeState {
    applied: BTreeSet<String>,
    invocations: Vec<Invocation>,
    executed_files: Vec<String>,
    failures: Vec<(String, String)>,
}

/// In-memory fake for [`CommandExecutor`].
#[derive(Default)]
pub struct FakeExecutor {
    state: Mutex<FakeState>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the emulated ledger.
    pub fn seed_applied<I: IntoIterator<Item = S>, S: Into<String>>(&self, versions: I) {
        let mut state = self.state.lock().unwrap();
        state.applied.extend(versions.into_iter().map(Into::into));
    }

    /// Fail any invocation whose SQL, file path, or file content contains
    /// `pattern`.
    pub fn fail_matching(&self, pattern: &str, stderr: &str) {
        let mut state = self.state.lock().unwrap();
        state
            .failures
            .push((pattern.to_string(), stderr.to_string()));
    }

    /// Versions currently in the emulated ledger, ascending.
    pub fn applied_versions(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.applied.iter().cloned().collect()
    }

    /// Every call made so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        let state = self.state.lock().unwrap();
        state.invocations.clone()
    }

    /// Contents of SQL files at the moment they were executed (the runner
    /// deletes its temp files afterwards).
    pub fn executed_files(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.executed_files.clone()
    }
}

/// Pull the first single-quoted literal out of a SQL string.
fn quoted_value(sql: &str) -> Option<String> {
    let start = sql.find('\'')? + 1;
    let end = sql[start..].find('\'')? + start;
    Some(sql[start..end].to_string())
}

#[async_trait]
impl CommandExecutor for FakeExecutor {
    async fn execute(&self, program: &str, args: &[String]) -> DbResult<CommandOutput> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        };
        let sql = invocation.sql().map(str::to_string);
        let file = invocation.file().map(str::to_string);
        let file_content = file
            .as_deref()
            .and_then(|path| std::fs::read_to_string(path).ok());

        let mut state = self.state.lock().unwrap();
        state.invocations.push(invocation);
        if let Some(content) = &file_content {
            state.executed_files.push(content.clone());
        }

        let failure = state.failures.iter().find(|(pattern, _)| {
            sql.as_deref().is_some_and(|s| s.contains(pattern))
                || file.as_deref().is_some_and(|f| f.contains(pattern))
                || file_content.as_deref().is_some_and(|c| c.contains(pattern))
        });
        if let Some((pattern, stderr)) = failure {
            return Err(DbError::CommandFailed {
                message: format!("scripted failure for '{pattern}'"),
                stderr: stderr.clone(),
            });
        }

        let Some(sql) = sql else {
            return Ok(CommandOutput::default());
        };

        if sql.contains("SELECT version FROM schema_migrations") {
            let mut stdout = state
                .applied
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join("\n");
            if !stdout.is_empty() {
                stdout.push('\n');
            }
            return Ok(CommandOutput {
                stdout,
                stderr: String::new(),
            });
        }

        if sql.starts_with("INSERT INTO schema_migrations") {
            if let Some(version) = quoted_value(&sql) {
                state.applied.insert(version);
            }
        } else if sql.starts_with("DELETE FROM schema_migrations") {
            if let Some(version) = quoted_value(&sql) {
                state.applied.remove(&version);
            }
        }

        Ok(CommandOutput::default())
    }
}
