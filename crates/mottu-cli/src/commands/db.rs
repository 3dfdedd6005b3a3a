//! Sample data commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use mottu_auth::PasswordHasher;
use mottu_core::config::{AppConfig, DatabaseProvider};
use mottu_core::error::AppError;
use mottu_database::DataStore;
use mottu_service::{SeedReport, Seeder};

use crate::output::{self, OutputFormat};

/// Arguments for db commands
#[derive(Debug, Args)]
pub struct DbArgs {
    /// Db subcommand
    #[command(subcommand)]
    pub command: DbCommand,
}

/// Db subcommands
#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Insert the sample dataset (users, zones, yards, statuses, motos)
    Seed {
        /// Empty every table before seeding
        #[arg(long)]
        reset: bool,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct SeedRow {
    table: &'static str,
    inserted: usize,
}

fn seed_rows(report: &SeedReport) -> Vec<SeedRow> {
    [
        ("usuario", report.users),
        ("zona", report.zones),
        ("patio", report.yards),
        ("status_grupo", report.status_groups),
        ("status", report.statuses),
        ("moto", report.motos),
    ]
    .into_iter()
    .map(|(table, inserted)| SeedRow { table, inserted })
    .collect()
}

/// Execute db commands
pub async fn execute(
    args: &DbArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        DbCommand::Seed { reset, force } => seed(&config, *reset, *force, format).await,
    }
}

async fn seed(
    config: &AppConfig,
    reset: bool,
    force: bool,
    format: OutputFormat,
) -> Result<(), AppError> {
    if !config.seed.enabled {
        return Err(AppError::configuration(
            "seeding is disabled; set seed.enabled = true (or MOTTU__SEED__ENABLED=true)",
        ));
    }
    if config.database.provider == DatabaseProvider::Memory {
        output::print_warning(
            "database.provider is \"memory\"; seeded rows vanish when this command exits.",
        );
    }

    if reset && !force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt("This will DELETE every row in all six tables. Continue?")
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let store = DataStore::open(&config.database).await?;
    let seeder = Seeder::new(store.repositories().clone(), Arc::new(PasswordHasher::new()));
    let result = seeder.run(reset).await;
    store.close().await;

    let report = result?;
    output::print_success("Sample data loaded.");
    output::print_list(&seed_rows(&report), format);
    Ok(())
}
