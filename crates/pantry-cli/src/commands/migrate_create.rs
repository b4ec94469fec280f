//! migrate:create command implementation - author a new migration file

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, MigrateCreateArgs};
use crate::context::RuntimeContext;

/// Execute the migrate:create command
pub async fn execute(args: &MigrateCreateArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global);

    let path = ctx
        .store
        .create_migration(&args.name)
        .context("Failed to create migration file")?;

    println!("  ✓ created {}", path.display());
    println!();
    println!("Edit the file and fill in the -- UP and -- DOWN sections.");
    Ok(())
}

#[cfg(test)]
#[path = "migrate_create_test.rs"]
mod tests;
