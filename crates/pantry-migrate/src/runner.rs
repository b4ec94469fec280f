//! Migration runner
//!
//! Sequencing and bookkeeping only: the runner computes the pending set
//! (file store minus ledger), applies migrations one at a time through
//! the psql client, and keeps the ledger in step. It does not add
//! transaction management; migration authors own their own BEGIN/COMMIT.

use crate::error::{MigrateError, MigrateResult};
use pantry_core::{Direction, MigrationFile, MigrationStore};
use pantry_db::{Ledger, PsqlClient};
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

/// Orchestrates migration execution against one database.
pub struct Runner {
    store: MigrationStore,
    ledger: Ledger,
    client: PsqlClient,
}

impl Runner {
    pub fn new(store: MigrationStore, ledger: Ledger, client: PsqlClient) -> Self {
        Self {
            store,
            ledger,
            client,
        }
    }

    /// Apply all pending migrations in ascending version order.
    ///
    /// Returns the versions applied. The first failure aborts the run;
    /// remaining pending migrations are not attempted.
    pub async fn migrate_up(&self) -> MigrateResult<Vec<String>> {
        let files = self.store.list_migration_files()?;
        if files.is_empty() {
            log::debug!("No migration files found, nothing to do");
            return Ok(Vec::new());
        }

        let applied: HashSet<String> = self.ledger.list_applied().await.into_iter().collect();
        let pending: Vec<&MigrationFile> = files
            .iter()
            .filter(|f| !applied.contains(&f.version))
            .collect();

        if pending.is_empty() {
            log::debug!("All {} migrations already applied", files.len());
            return Ok(Vec::new());
        }

        let mut done = Vec::with_capacity(pending.len());
        for file in pending {
            self.apply_one(file).await?;
            done.push(file.version.clone());
        }
        Ok(done)
    }

    async fn apply_one(&self, file: &MigrationFile) -> MigrateResult<()> {
        let sql = file.extract_section(Direction::Up)?;
        log::info!("Applying migration {}", file.version);

        self.execute_staged(&file.version, &sql).await?;
        self.ledger.record_applied(&file.version).await?;

        // Verification read: diagnostic only, never fails the run.
        let applied = self.ledger.list_applied().await;
        if applied.iter().any(|v| v == &file.version) {
            log::debug!("Verified ledger entry for {}", file.version);
        } else {
            log::warn!(
                "Migration {} executed but its ledger entry could not be verified",
                file.version
            );
        }
        Ok(())
    }

    /// Roll back the most recently applied migration (greatest version).
    ///
    /// Returns `Ok(None)` when nothing is applied. Fails without touching
    /// the ledger when the target version has no file on disk.
    pub async fn migrate_down(&self) -> MigrateResult<Option<String>> {
        let applied = self.ledger.list_applied().await;
        // list_applied is ascending, so the target is the last entry.
        let Some(version) = applied.last().cloned() else {
            log::debug!("Ledger is empty, nothing to roll back");
            return Ok(None);
        };

        let files = self.store.list_migration_files()?;
        let Some(file) = files.iter().find(|f| f.version == version) else {
            return Err(MigrateError::MigrationFileNotFound {
                version,
                available: files.into_iter().map(|f| f.filename).collect(),
            });
        };

        let sql = file.extract_section(Direction::Down)?;
        log::info!("Rolling back migration {}", file.version);

        self.execute_staged(&file.version, &sql).await?;
        self.ledger.remove_applied(&file.version).await?;
        Ok(Some(version))
    }

    /// Write `sql` to a scoped temp file and run it through psql.
    ///
    /// NamedTempFile removes the file on drop, so cleanup happens on
    /// every exit path including errors.
    async fn execute_staged(&self, version: &str, sql: &str) -> MigrateResult<()> {
        let staging_err = |e: std::io::Error| MigrateError::StagingFailed {
            version: version.to_string(),
            source: e,
        };

        let mut staged = NamedTempFile::with_suffix(".sql").map_err(staging_err)?;
        staged.write_all(sql.as_bytes()).map_err(staging_err)?;
        staged.flush().map_err(staging_err)?;

        self.client.run_file(staged.path()).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
