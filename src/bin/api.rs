//! Chartwatch API Server
//!
//! Run with: cargo run --bin chartwatch-api
//!
//! # Configuration
//!
//! Read from the first `config.toml` found in the user config directory,
//! `/etc/chartwatch/` or the working directory, or from `--config`.
//!
//! Environment variables:
//! - `CHARTWATCH_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CHARTWATCH_API_PORT`: Port to listen on (default: 8090)
//! - `CHARTWATCH_LOG_LEVEL`: Log level (default: info)
//! - `CHARTWATCH_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full filter directive, overrides the log level

use chartwatch::api::{serve, AppState};
use chartwatch::config::{Config, LoggingConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chartwatch-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the 12 Charts to Watch dashboard API")]
struct Args {
    /// Path to a config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Chartwatch API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        palette = ?config.dashboard.palette,
        max_series_length = config.dashboard.max_series_length,
        "Dashboard settings"
    );

    let state = AppState::from_config(&config)?;

    serve(state, &config.api).await?;

    tracing::info!("Chartwatch API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("chartwatch={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
