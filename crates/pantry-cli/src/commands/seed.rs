//! Seed command implementation
//!
//! Executes every seed SQL file in lexicographic order. Unlike
//! migrations, seeding tracks no state: re-running a seed is the seed
//! author's concern.

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{GlobalArgs, SeedArgs};
use crate::context::RuntimeContext;

/// Represents a discovered seed file
struct SeedFile {
    /// Name of the seed (filename without .sql extension)
    name: String,
    /// Path to the SQL file
    path: PathBuf,
}

/// Discover all SQL seed files, sorted by name for consistent ordering
fn discover_seeds(dir: &Path) -> Vec<SeedFile> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut seeds = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() || !path.extension().is_some_and(|e| e == "sql") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            seeds.push(SeedFile {
                name: stem.to_string(),
                path,
            });
        }
    }

    seeds.sort_by(|a, b| a.name.cmp(&b.name));
    seeds
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global);
    load_seeds(&ctx, args).await
}

pub(crate) async fn load_seeds(ctx: &RuntimeContext, args: &SeedArgs) -> Result<()> {
    let all_seeds = discover_seeds(&ctx.config.seeds_dir);

    if all_seeds.is_empty() {
        println!(
            "No seed files found in {}.",
            ctx.config.seeds_dir.display()
        );
        return Ok(());
    }

    // Filter seeds if --seeds was specified
    let seeds_to_load: Vec<&SeedFile> = if let Some(filter) = &args.seeds {
        let filter_names: HashSet<&str> = filter.split(',').map(|s| s.trim()).collect();
        all_seeds
            .iter()
            .filter(|s| filter_names.contains(s.name.as_str()))
            .collect()
    } else {
        all_seeds.iter().collect()
    };

    if seeds_to_load.is_empty() {
        println!("No matching seed files found.");
        return Ok(());
    }

    println!("Loading {} seeds...\n", seeds_to_load.len());

    let mut failure_count = 0;
    for seed in &seeds_to_load {
        ctx.verbose(&format!("Executing seed file {}", seed.path.display()));
        match ctx.client.run_file(&seed.path).await {
            Ok(_) => println!("  ✓ {}", seed.name),
            Err(e) => {
                failure_count += 1;
                println!("  ✗ {} - {}", seed.name, e);
            }
        }
    }

    println!();
    println!(
        "Loaded {} of {} seeds",
        seeds_to_load.len() - failure_count,
        seeds_to_load.len()
    );

    if failure_count > 0 {
        anyhow::bail!("{failure_count} seed file(s) failed");
    }
    Ok(())
}
