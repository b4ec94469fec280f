//! Migration diagnostics
//!
//! Cross-references the file store and the ledger. Reporting only; no
//! corrective action is ever taken here.

use crate::error::MigrateResult;
use pantry_core::MigrationStore;
use pantry_db::Ledger;
use serde::Serialize;
use std::collections::HashSet;

/// One migration file's applied/pending state.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationState {
    pub version: String,
    pub filename: String,
    pub applied: bool,
}

/// Output of `migrate:status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub migrations: Vec<MigrationState>,
    pub applied_count: usize,
    pub pending_count: usize,
}

/// Output of `migrate:debug`: status plus orphan detection.
#[derive(Debug, Clone, Serialize)]
pub struct DebugReport {
    #[serde(flatten)]
    pub status: StatusReport,

    /// Files never applied (the pending set)
    pub pending_files: Vec<String>,

    /// Ledger entries whose file is missing (deleted after being applied)
    pub orphaned_records: Vec<String>,
}

/// Compute the applied/pending join of files and ledger.
pub async fn status(store: &MigrationStore, ledger: &Ledger) -> MigrateResult<StatusReport> {
    let files = store.list_migration_files()?;
    let applied: HashSet<String> = ledger.list_applied().await.into_iter().collect();

    let migrations: Vec<MigrationState> = files
        .into_iter()
        .map(|f| MigrationState {
            applied: applied.contains(&f.version),
            version: f.version,
            filename: f.filename,
        })
        .collect();

    let applied_count = migrations.iter().filter(|m| m.applied).count();
    let pending_count = migrations.len() - applied_count;

    Ok(StatusReport {
        migrations,
        applied_count,
        pending_count,
    })
}

/// Status plus orphaned ledger records and the pending file list.
pub async fn debug(store: &MigrationStore, ledger: &Ledger) -> MigrateResult<DebugReport> {
    let files = store.list_migration_files()?;
    let file_versions: HashSet<&str> = files.iter().map(|f| f.version.as_str()).collect();
    let applied = ledger.list_applied().await;

    let orphaned_records: Vec<String> = applied
        .iter()
        .filter(|v| !file_versions.contains(v.as_str()))
        .cloned()
        .collect();

    let status = status(store, ledger).await?;
    let pending_files = status
        .migrations
        .iter()
        .filter(|m| !m.applied)
        .map(|m| m.filename.clone())
        .collect();

    Ok(DebugReport {
        status,
        pending_files,
        orphaned_records,
    })
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
