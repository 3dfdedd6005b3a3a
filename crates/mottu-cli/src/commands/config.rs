//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use mottu_core::config::AppConfig;
use mottu_core::error::AppError;
use mottu_database::connection::mask_password;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration (database password masked)
    Show,
    /// Validate configuration file
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    loaded: Result<AppConfig, AppError>,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = loaded?;
            config.database.url = mask_password(&config.database.url);
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match loaded {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv("Server", &config.server.bind_address());
                output::print_kv("Provider", &format!("{:?}", config.database.provider));
                output::print_kv("Database", &mask_password(&config.database.url));
                output::print_kv("Seed enabled", &config.seed.enabled.to_string());
                output::print_kv(
                    "Log",
                    &format!("{} ({})", config.logging.level, config.logging.format),
                );
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}
