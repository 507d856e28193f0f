//! Enrollment Dashboard server
//!
//! Run with: cargo run --bin enrollment [-- --config path/to/config.toml]
//!
//! Configuration is read from `--config` when given, otherwise from the
//! default locations (see [`enrollment::config`]). Environment variables
//! override file values:
//! - `ENROLLMENT_HOST`, `ENROLLMENT_PORT`
//! - `ENROLLMENT_UI_DIR`: built frontend to serve alongside the API
//! - `ENROLLMENT_LOG_LEVEL`, `ENROLLMENT_LOG_FORMAT`
//! - `RUST_LOG`: overrides the log filter entirely

use clap::Parser;
use enrollment::api::{serve, ApiConfig, AppState};
use enrollment::config::Config;
use enrollment::dataset::{group_thousands, Dataset};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "enrollment")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the AADHAAR enrollment dashboard")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the frontend build directory
    #[arg(long)]
    ui_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    let mut config = loaded.config.clone();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = &args.ui_dir {
        config.ui.dist_dir = Some(dir.to_string_lossy().to_string());
    }

    enrollment::logging::init(&config.logging);
    loaded.report();

    tracing::info!("Starting enrollment dashboard v{}", env!("CARGO_PKG_VERSION"));

    let dataset = Arc::new(Dataset::sample());
    let totals = dataset.totals();
    tracing::info!(
        states = dataset.row_count(),
        total_bio = %group_thousands(totals.total_bio),
        "Loaded sample dataset"
    );

    let api_config = ApiConfig::from(&config);
    match &api_config.ui_dir {
        Some(dir) => tracing::info!("Frontend directory: {:?}", dir),
        None => tracing::info!("No frontend directory configured (set ENROLLMENT_UI_DIR to serve one)"),
    }

    let state = AppState::with_dataset(dataset, api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("Enrollment dashboard stopped");
    Ok(())
}
