//! Start the Mottu Vision server.

use clap::Args;

use mottu_core::config::AppConfig;
use mottu_core::error::AppError;
use mottu_database::DataStore;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    config.validate()?;

    println!("Starting Mottu Vision server...");
    output::print_kv("Host", &config.server.host);
    output::print_kv("Port", &config.server.port.to_string());

    let store = DataStore::open(&config.database).await?;
    mottu_api::run_server(config, store, mottu_api::shutdown_signal()).await
}
