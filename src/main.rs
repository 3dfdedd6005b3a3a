//! Mottu Vision server: fleet tracking API for motorcycle yards.
//!
//! Main entry point that loads configuration, opens the data store and
//! serves the HTTP API until Ctrl+C or SIGTERM.

use tracing_subscriber::{EnvFilter, fmt};

use mottu_core::config::AppConfig;
use mottu_core::error::AppError;
use mottu_database::DataStore;
use mottu_database::connection::mask_password;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("MOTTU_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("MOTTU_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        provider = ?config.database.provider,
        database = %mask_password(&config.database.url),
        "Starting Mottu Vision"
    );

    let store = DataStore::open(&config.database).await?;
    mottu_api::run_server(config, store, mottu_api::shutdown_signal()).await
}
