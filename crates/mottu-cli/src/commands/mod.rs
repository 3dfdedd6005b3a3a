//! CLI command definitions and dispatch.

pub mod config;
pub mod db;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use mottu_core::config::AppConfig;
use mottu_core::error::AppError;
use mottu_database::DatabasePool;

use crate::output::OutputFormat;

/// Mottu Vision: fleet tracking API for motorcycle yards
#[derive(Debug, Parser)]
#[command(name = "mottu", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay, read from `config/<env>.toml` when present
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Sample data management
    Db(db::DbArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let loaded = load_config(&self.config, &self.env);
        match &self.command {
            Commands::Serve(args) => serve::execute(args, loaded?).await,
            Commands::Migrate(args) => migrate::execute(args, loaded?, self.format).await,
            Commands::Db(args) => db::execute(args, loaded?, self.format).await,
            Commands::Config(args) => config::execute(args, loaded, &self.config, self.format),
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str, env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path, env)
}

/// Helper: connect to PostgreSQL; the in-memory provider has no schema
/// to migrate.
pub async fn connect_postgres(config: &AppConfig) -> Result<DatabasePool, AppError> {
    if config.database.provider != mottu_core::config::DatabaseProvider::Postgres {
        return Err(AppError::configuration(
            "this command needs database.provider = \"postgres\"",
        ));
    }
    DatabasePool::connect(&config.database).await
}
