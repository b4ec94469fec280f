//! migrate:down command implementation

use anyhow::Result;
use std::time::Instant;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the migrate:down command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global);
    let start_time = Instant::now();

    match ctx.runner().migrate_down().await? {
        Some(version) => {
            println!("  ✓ rolled back {version}");
            println!();
            println!("Rolled back in {}ms", start_time.elapsed().as_millis());
        }
        None => println!("No applied migrations to roll back."),
    }
    Ok(())
}
