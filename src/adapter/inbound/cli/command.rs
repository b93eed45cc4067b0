//! Command-line interface definitions.
//!
//! Positional arguments override environment variables, which override
//! the optional config file.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bridge rate-limit capacity monitor
#[derive(Parser, Debug)]
#[command(name = "bridgewatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read capacity once; exit 0 if available, 1 otherwise
    Check(CheckArgs),

    /// Poll until capacity is available or the wait budget runs out
    Wait(WaitArgs),

    /// Poll and log capacity changes indefinitely
    Monitor(MonitorArgs),

    /// Withdraw to the recipient whenever capacity reaches the threshold
    Trigger(TriggerArgs),

    /// Transfer the full token balance to the deposit address once it
    /// reaches the minimum
    Sweep(SweepArgs),

    /// Show the resolved configuration
    Config,
}

/// Arguments for `check`.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Destination endpoint id
    pub target: Option<String>,

    /// Print the reading as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `wait`.
#[derive(Args, Debug, Default)]
pub struct WaitArgs {
    /// Destination endpoint id
    pub target: Option<String>,

    /// Give up after this many minutes
    pub max_minutes: Option<u64>,
}

/// Arguments for `monitor`.
#[derive(Args, Debug, Default)]
pub struct MonitorArgs {
    /// Destination endpoint id
    pub target: Option<String>,

    /// Seconds between readings
    pub interval_seconds: Option<u64>,
}

/// Arguments for `trigger`.
#[derive(Args, Debug, Default)]
pub struct TriggerArgs {
    /// Destination endpoint id
    pub target: Option<String>,

    /// Seconds between readings
    #[arg(long)]
    pub interval: Option<u64>,
}

/// Arguments for `sweep`.
#[derive(Args, Debug, Default)]
pub struct SweepArgs {
    /// Seconds between balance reads
    #[arg(long)]
    pub interval: Option<u64>,
}
