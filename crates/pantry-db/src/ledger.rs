//! Applied-migration ledger
//!
//! One row per applied migration in `schema_migrations`. Rows are created
//! when an UP section succeeds and deleted when a DOWN section succeeds,
//! never updated in place.

use crate::client::{quote_literal, PsqlClient};
use crate::error::DbResult;

/// Table recording applied migration versions.
pub const LEDGER_TABLE: &str = "schema_migrations";

/// Ledger over the target database.
#[derive(Clone)]
pub struct Ledger {
    client: PsqlClient,
}

impl Ledger {
    pub fn new(client: PsqlClient) -> Self {
        Self { client }
    }

    /// Idempotently create the ledger table. Safe to call before every read.
    pub async fn ensure_table(&self) -> DbResult<()> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {LEDGER_TABLE} (\
             id SERIAL PRIMARY KEY, \
             version VARCHAR(255) NOT NULL UNIQUE, \
             applied_at TIMESTAMP NOT NULL DEFAULT NOW())"
        );
        self.client.run_sql(&sql).await?;
        Ok(())
    }

    /// All applied versions, ascending by version string.
    ///
    /// Degrades to an empty list on any underlying failure so that a
    /// ledger read problem never blocks diagnostics; the failure is still
    /// logged so a transient outage is distinguishable from an empty
    /// ledger in the logs.
    pub async fn list_applied(&self) -> Vec<String> {
        if let Err(e) = self.ensure_table().await {
            log::warn!("Could not ensure ledger table, treating ledger as empty: {e}");
            return Vec::new();
        }

        let sql = format!("SELECT version FROM {LEDGER_TABLE} ORDER BY version ASC");
        match self.client.run_sql(&sql).await {
            Ok(stdout) => stdout
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(e) => {
                log::warn!("Could not read ledger, treating it as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Record a version as applied. Insert-or-ignore: re-recording an
    /// already-present version leaves exactly one row.
    pub async fn record_applied(&self, version: &str) -> DbResult<()> {
        let sql = format!(
            "INSERT INTO {LEDGER_TABLE} (version) VALUES ({}) ON CONFLICT (version) DO NOTHING",
            quote_literal(version)
        );
        self.client.run_sql(&sql).await?;
        Ok(())
    }

    /// Remove a version from the ledger. Removing an absent version is
    /// not an error.
    pub async fn remove_applied(&self, version: &str) -> DbResult<()> {
        let sql = format!(
            "DELETE FROM {LEDGER_TABLE} WHERE version = {}",
            quote_literal(version)
        );
        self.client.run_sql(&sql).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
