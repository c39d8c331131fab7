//! Pharmacy CLI - Schema setup and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the tables in a file-backed store
//! pharmacy-cli schema init --database-url sqlite://pharmacy.db
//!
//! # Load medications from a YAML catalog
//! pharmacy-cli seed medications --file catalog.yaml
//!
//! # Show row counts per table
//! pharmacy-cli stats
//! ```
//!
//! # Commands
//!
//! - `schema init` - Create tables (idempotent)
//! - `seed medications` - Insert catalog entries from YAML
//! - `stats` - Row counts per table
//!
//! Without `--database-url`, `PHARMACY_DATABASE_URL` (or `DATABASE_URL`) is used.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "pharmacy-cli")]
#[command(author, version, about = "Pharmacy backend CLI tools")]
struct Cli {
    /// SQLite connection string (e.g. sqlite://pharmacy.db)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the database schema
    Schema {
        #[command(subcommand)]
        action: SchemaAction,
    },
    /// Seed the database with data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// Show row counts per table
    Stats,
}

#[derive(Subcommand)]
enum SchemaAction {
    /// Create any missing tables
    Init,
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Insert medications from a YAML catalog file
    Medications {
        /// Path to the YAML file
        #[arg(short, long)]
        file: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let database_url = commands::resolve_database_url(cli.database_url)?;

    match cli.command {
        Commands::Schema { action } => match action {
            SchemaAction::Init => commands::schema::init(&database_url).await?,
        },
        Commands::Seed { target } => match target {
            SeedTarget::Medications { file } => {
                commands::seed::medications(&database_url, &file).await?;
            }
        },
        Commands::Stats => commands::stats::show(&database_url).await?,
    }
    Ok(())
}
