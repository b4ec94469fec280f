//! Clean command implementation - drop the target database

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the clean command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global);
    drop_database(&ctx).await
}

/// Drop the target database if it exists.
pub(crate) async fn drop_database(ctx: &RuntimeContext) -> Result<()> {
    let name = ctx.config.database_name()?.to_string();
    let admin = ctx.admin_client()?;
    ctx.verbose(&format!("Dropping database via {}", admin.url()));

    admin
        .run_sql(&format!("DROP DATABASE IF EXISTS {name}"))
        .await?;
    println!("  ✓ dropped database {name}");
    Ok(())
}
