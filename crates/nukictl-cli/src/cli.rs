//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// nukictl - control Nuki smart locks through the bridge HTTP API
#[derive(Parser, Debug)]
#[command(name = "nukictl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bridge IP address or hostname (overrides config)
    #[arg(short = 'i', long, global = true, env = "NUKI_BRIDGE_IP")]
    pub ip: Option<String>,

    /// Bridge API token (overrides config)
    #[arg(short = 't', long, global = true, env = "NUKI_TOKEN")]
    pub token: Option<String>,

    /// Attempts per lock operation (overrides config)
    #[arg(short = 'r', long, global = true, env = "NUKI_RETRIES")]
    pub retries: Option<u32>,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value = "10000")]
    pub timeout: u64,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Exit non-zero when a bulk operation partially fails
    #[arg(long, global = true)]
    pub strict: bool,

    /// Config file path (default: platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Unlock a lock
    Open(TargetArgs),

    /// Lock a lock
    Close(TargetArgs),

    /// Query the current state of a lock
    Status(TargetArgs),

    /// List devices paired with the bridge
    List,

    /// Show bridge runtime information
    Info,

    /// Unlock every lock known to the bridge
    Openall,

    /// Lock every lock known to the bridge
    Closeall,
}

/// Which lock a single-device command targets.
///
/// Falls back to the config file's `nukiId` when neither flag is given.
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Device id (overrides config)
    #[arg(short = 'd', long = "id")]
    pub id: Option<u64>,

    /// Device name, resolved to an id via the bridge's device list
    #[arg(short = 'n', long, conflicts_with = "id")]
    pub name: Option<String>,
}
