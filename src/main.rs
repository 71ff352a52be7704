//! Strider - turn-by-turn pedestrian navigation narrator
//!
//! CLI entry point. The `simulate` subcommand wires the coordinator to the
//! deterministic provider stack so a full poll-resolve-narrate session can be
//! exercised from a desk.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::Result;
use tracing::{debug, info};

use strider::cli::{Cli, Command};
use strider::config::NavConfig;
use strider::navigator::Navigator;
use strider::permission::PermissionGate;
use strider::providers::sim::{
    ConsoleNarration, SimLocationProvider, SimPermissionProvider, SimRoutingProvider,
    SimSearchProvider,
};

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let level = match cli_log_level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref())?;

    let config = NavConfig::load(cli.config.as_ref())?;
    debug!(?config, "main: loaded config");

    match cli.command {
        Command::Simulate {
            destination,
            ticks,
            tick_interval_ms,
        } => simulate(config, &destination, ticks, tick_interval_ms).await,
    }
}

/// Run a simulated session for a fixed number of ticks, then stop it
async fn simulate(
    mut config: NavConfig,
    destination: &str,
    ticks: u32,
    tick_interval_ms: Option<u64>,
) -> Result<()> {
    if let Some(interval) = tick_interval_ms {
        config.tick_interval_ms = interval;
    }
    let tick_interval = Duration::from_millis(config.tick_interval_ms);

    let mut navigator = Navigator::new(
        Arc::new(SimLocationProvider::manhattan_walker()),
        Arc::new(SimSearchProvider),
        Arc::new(SimRoutingProvider),
        Arc::new(ConsoleNarration),
        PermissionGate::new(Arc::new(SimPermissionProvider)),
        config,
    )?;

    info!(%destination, ticks, "Starting simulated navigation");
    println!("Navigating to: {}", destination);

    navigator.start_navigation(destination)?;
    // Half a tick of headroom so the final tick finishes narrating before the
    // stop signal lands.
    tokio::time::sleep(tick_interval * ticks + tick_interval / 2).await;
    navigator.stop_navigation();

    // Let the session observe the stop and wind down.
    while navigator.is_running() {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    println!("Navigation stopped.");
    Ok(())
}
