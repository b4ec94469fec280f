//! Runtime context for CLI operations

use anyhow::{Context, Result};
use pantry_core::{Config, MigrationStore};
use pantry_db::{CommandExecutor, Ledger, ProcessExecutor, PsqlClient};
use pantry_migrate::Runner;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Runtime context containing resolved config and database access.
pub struct RuntimeContext {
    /// Resolved configuration
    pub config: Config,

    /// psql client bound to the target database
    pub client: PsqlClient,

    /// Applied-migration ledger
    pub ledger: Ledger,

    /// Migration file store
    pub store: MigrationStore,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments.
    pub fn new(global: &GlobalArgs) -> Self {
        let config = Config::resolve(
            global.database_url.as_deref(),
            global.migrations_dir.as_deref(),
            global.seeds_dir.as_deref(),
        );

        let executor: Arc<dyn CommandExecutor> = Arc::new(ProcessExecutor);
        let client = PsqlClient::new(executor, config.database_url.clone());
        let ledger = Ledger::new(client.clone());
        let store = MigrationStore::new(config.migrations_dir.clone());

        Self {
            config,
            client,
            ledger,
            store,
            verbose: global.verbose,
        }
    }

    /// Build a migration runner over this context.
    pub fn runner(&self) -> Runner {
        Runner::new(self.store.clone(), self.ledger.clone(), self.client.clone())
    }

    /// psql client for the maintenance database on the same server.
    pub fn admin_client(&self) -> Result<PsqlClient> {
        let admin_url = self
            .config
            .admin_url()
            .context("Failed to derive maintenance database URL")?;
        Ok(self.client.with_url(admin_url))
    }

    /// Print verbose output if enabled.
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
