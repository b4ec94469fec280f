//! migrate:up command implementation

use anyhow::Result;
use std::time::Instant;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the migrate:up command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global);
    run(&ctx).await
}

pub(crate) async fn run(ctx: &RuntimeContext) -> Result<()> {
    let start_time = Instant::now();
    ctx.verbose(&format!(
        "Scanning {} for pending migrations",
        ctx.store.dir().display()
    ));

    let applied = ctx.runner().migrate_up().await?;

    if applied.is_empty() {
        println!("No pending migrations.");
        return Ok(());
    }

    for version in &applied {
        println!("  ✓ {version}");
    }
    println!();
    println!(
        "Applied {} migration{} in {}ms",
        applied.len(),
        if applied.len() == 1 { "" } else { "s" },
        start_time.elapsed().as_millis()
    );
    Ok(())
}
