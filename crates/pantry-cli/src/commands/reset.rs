//! Reset command implementation - drop everything and rebuild

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::commands::{clean, setup};

/// Execute the reset command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    println!("Resetting database...\n");
    clean::execute(global).await?;
    setup::execute(global).await
}
