//! migrate:debug command implementation
//!
//! Everything migrate:status shows, plus orphaned ledger records
//! (applied versions whose file has been deleted). Reporting only.

use anyhow::{Context, Result};
use pantry_migrate::DebugReport;

use crate::cli::{GlobalArgs, ReportArgs, ReportOutput};
use crate::context::RuntimeContext;

/// Execute the migrate:debug command
pub async fn execute(args: &ReportArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global);
    let report = pantry_migrate::debug(&ctx.store, &ctx.ledger).await?;

    match args.output {
        ReportOutput::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        }
        ReportOutput::Table => print_table(&report),
    }
    Ok(())
}

fn print_table(report: &DebugReport) {
    println!("Database: ledger has {} applied version(s)", report.status.applied_count);
    println!();

    println!("Pending files ({}):", report.pending_files.len());
    for filename in &report.pending_files {
        println!("  • {filename}");
    }
    println!();

    println!("Orphaned ledger records ({}):", report.orphaned_records.len());
    for version in &report.orphaned_records {
        println!("  ! {version} (no matching file on disk)");
    }

    if !report.orphaned_records.is_empty() {
        println!();
        println!("Orphaned records usually mean a migration file was deleted after");
        println!("being applied. They are reported only; nothing is changed.");
    }
}
