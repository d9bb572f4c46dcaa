//! # Workforce Data CLI
//!
//! Operational entry point for the data layer: run migrations, seed
//! reference data, and emit the OpenAPI component document.

use anyhow::Result;
use clap::{Parser, Subcommand};
use uuid::Uuid;

use migration::{Migrator, MigratorTrait};
use workforce_data::{
    config::ConfigLoader,
    db::init_pool,
    openapi::openapi_json,
    seeds::seed_employment_types,
    telemetry::init_tracing,
};

#[derive(Parser)]
#[command(name = "workforce-data", about = "Workforce data layer operations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
    /// Seed the employment type catalog for an organization
    Seed {
        /// Tenant the organization belongs to
        #[arg(long)]
        tenant: Uuid,
        /// Organization to seed
        #[arg(long)]
        organization: Uuid,
    },
    /// Print the OpenAPI component document as JSON
    Openapi,
}

#[derive(Subcommand)]
enum MigrateAction {
    /// Apply all pending migrations
    Up,
    /// Roll back the most recent migration
    Down,
    /// Drop everything and re-apply all migrations
    Fresh,
    /// Show migration status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::new().load()?;
    init_tracing(&config)?;

    match cli.command {
        Command::Migrate { action } => {
            let db = init_pool(&config).await?;
            match action {
                MigrateAction::Up => Migrator::up(&db, None).await?,
                MigrateAction::Down => Migrator::down(&db, Some(1)).await?,
                MigrateAction::Fresh => Migrator::fresh(&db).await?,
                MigrateAction::Status => Migrator::status(&db).await?,
            }
        }
        Command::Seed {
            tenant,
            organization,
        } => {
            let db = init_pool(&config).await?;
            let created = seed_employment_types(&db, tenant, organization).await?;
            println!("seeded {} employment types", created);
        }
        Command::Openapi => {
            println!("{}", openapi_json()?);
        }
    }

    Ok(())
}
