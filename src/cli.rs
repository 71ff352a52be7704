//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strider - turn-by-turn pedestrian navigation narrator
#[derive(Parser)]
#[command(
    name = "strider",
    about = "Turn-by-turn pedestrian navigation narrator",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk a simulated navigation session against scripted providers
    Simulate {
        /// Free-text destination to navigate towards
        destination: String,

        /// Number of ticks to run before stopping
        #[arg(short, long, default_value_t = 4)]
        ticks: u32,

        /// Override the inter-tick sleep in milliseconds
        #[arg(long = "tick-interval-ms")]
        tick_interval_ms: Option<u64>,
    },
}
