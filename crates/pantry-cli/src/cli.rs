//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// pantry - database create/seed/migrate utility for the foods service
#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Operation to execute; none prints usage
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all operations
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the database connection string (default: $DATABASE_URL)
    #[arg(short = 'd', long, global = true)]
    pub database_url: Option<String>,

    /// Override the migrations directory
    #[arg(long, global = true)]
    pub migrations_dir: Option<String>,

    /// Override the seeds directory
    #[arg(long, global = true)]
    pub seeds_dir: Option<String>,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the target database
    Create,

    /// Drop the target database if it exists
    Clean,

    /// Execute seed SQL files (no state tracking)
    Seed(SeedArgs),

    /// Create the database, apply migrations, and load seeds
    Setup,

    /// Drop the database, then run a full setup
    Reset,

    /// Apply all pending migrations
    #[command(name = "migrate:up", alias = "migrate")]
    MigrateUp,

    /// Roll back the most recently applied migration
    #[command(name = "migrate:down")]
    MigrateDown,

    /// Show applied/pending state for every migration file
    #[command(name = "migrate:status")]
    MigrateStatus(ReportArgs),

    /// Generate a timestamped migration file
    #[command(name = "migrate:create")]
    MigrateCreate(MigrateCreateArgs),

    /// Show status plus orphaned ledger records
    #[command(name = "migrate:debug")]
    MigrateDebug(ReportArgs),
}

/// Arguments for the seed operation
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Seed names to load (comma-separated, default: all)
    #[arg(short, long)]
    pub seeds: Option<String>,
}

/// Arguments for status/debug reports
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: ReportOutput,
}

/// Report output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutput {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Arguments for migrate:create
#[derive(Args, Debug)]
pub struct MigrateCreateArgs {
    /// Human-readable migration name (slugified into the filename)
    pub name: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
