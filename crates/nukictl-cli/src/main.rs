//! nukictl - command-line client for Nuki smart locks behind a bridge.
//!
//! Talks to the bridge's local HTTP API: resolves the target lock, issues
//! lock/unlock/status commands with a bounded retry loop, and supports bulk
//! operations across every paired device.

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod settings;

use clap::Parser;
use nukictl_core::bridge::LockAction;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli
        .config
        .clone()
        .or_else(config::default_config_path)
        .ok_or_else(|| {
            CliError::InvalidArgument(
                "could not determine a config directory; pass --config".to_string(),
            )
        })?;
    let stored = config::load(&config_path);

    let settings = settings::Settings::resolve(&cli, &stored)?;

    match &cli.command {
        Commands::Open(target) => {
            commands::run_lock_action(&settings, target, LockAction::Unlock, cli.json).await
        }
        Commands::Close(target) => {
            commands::run_lock_action(&settings, target, LockAction::Lock, cli.json).await
        }
        Commands::Status(target) => commands::run_status(&settings, target, cli.json).await,
        Commands::List => commands::run_list(&settings, cli.json).await,
        Commands::Info => commands::run_info(&settings, cli.json).await,
        Commands::Openall => {
            commands::run_bulk(&settings, LockAction::Unlock, cli.json, cli.strict).await
        }
        Commands::Closeall => {
            commands::run_bulk(&settings, LockAction::Lock, cli.json, cli.strict).await
        }
    }
}
