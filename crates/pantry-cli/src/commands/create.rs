//! Create command implementation - create the target database

use anyhow::Result;
use pantry_db::DbError;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the create command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global);
    create_database(&ctx).await
}

/// Create the target database via the maintenance connection.
///
/// An already-existing database is a warning, not a failure, so that
/// `setup` stays idempotent.
pub(crate) async fn create_database(ctx: &RuntimeContext) -> Result<()> {
    let name = ctx.config.database_name()?.to_string();
    let admin = ctx.admin_client()?;
    ctx.verbose(&format!("Creating database via {}", admin.url()));

    match admin.run_sql(&format!("CREATE DATABASE {name}")).await {
        Ok(_) => {
            println!("  ✓ created database {name}");
            Ok(())
        }
        Err(DbError::CommandFailed { stderr, .. }) if stderr.contains("already exists") => {
            log::warn!("Database {name} already exists, leaving it as-is");
            println!("  ✓ database {name} already exists");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
