//! migrate:status command implementation

use anyhow::{Context, Result};
use pantry_migrate::StatusReport;

use crate::cli::{GlobalArgs, ReportArgs, ReportOutput};
use crate::context::RuntimeContext;

/// Execute the migrate:status command
pub async fn execute(args: &ReportArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global);
    let report = pantry_migrate::status(&ctx.store, &ctx.ledger).await?;

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

fn print_table(report: &StatusReport) {
    if report.migrations.is_empty() {
        println!("No migration files found.");
        return;
    }

    println!("Migrations:");
    for migration in &report.migrations {
        let mark = if migration.applied { "✓ applied" } else { "• pending" };
        println!("  {mark}  {}", migration.filename);
    }
    println!();
    println!(
        "{} applied, {} pending",
        report.applied_count, report.pending_count
    );
}
