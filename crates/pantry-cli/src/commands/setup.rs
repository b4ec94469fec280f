//! Setup command implementation - create, migrate, seed

use anyhow::Result;

use crate::cli::{GlobalArgs, SeedArgs};
use crate::commands::{create, migrate_up, seed};
use crate::context::RuntimeContext;

/// Execute the setup command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global);

    println!("Setting up database...\n");
    create::create_database(&ctx).await?;
    migrate_up::run(&ctx).await?;
    seed::load_seeds(&ctx, &SeedArgs { seeds: None }).await?;

    println!();
    println!("Setup complete.");
    Ok(())
}
