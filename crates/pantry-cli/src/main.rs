//! pantry CLI - database create/seed/migrate utility for the foods service

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::time::Instant;

mod cli;
mod commands;
mod context;

use cli::{Cli, Commands};
use commands::{
    clean, create, migrate_create, migrate_debug, migrate_down, migrate_status, migrate_up, reset,
    seed, setup,
};

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version are not failures; an unknown operation is.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // No operation: show usage and exit cleanly.
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };

    let start = Instant::now();
    let result = dispatch(&command, &cli.global).await;
    let duration = start.elapsed();

    if let Err(e) = result {
        log::error!("Operation failed after {}ms: {e:#}", duration.as_millis());
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn dispatch(command: &Commands, global: &cli::GlobalArgs) -> Result<()> {
    match command {
        Commands::Create => create::execute(global).await,
        Commands::Clean => clean::execute(global).await,
        Commands::Seed(args) => seed::execute(args, global).await,
        Commands::Setup => setup::execute(global).await,
        Commands::Reset => reset::execute(global).await,
        Commands::MigrateUp => migrate_up::execute(global).await,
        Commands::MigrateDown => migrate_down::execute(global).await,
        Commands::MigrateStatus(args) => migrate_status::execute(args, global).await,
        Commands::MigrateCreate(args) => migrate_create::execute(args, global).await,
        Commands::MigrateDebug(args) => migrate_debug::execute(args, global).await,
    }
}
