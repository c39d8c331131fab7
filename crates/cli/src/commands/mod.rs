//! CLI command implementations.

pub mod schema;
pub mod seed;
pub mod stats;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use pharmacy_api::db::{self, RepositoryError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// No database URL on the command line or in the environment.
    #[error("No database URL: pass --database-url or set PHARMACY_DATABASE_URL")]
    MissingDatabaseUrl,

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// A repository operation failed.
    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not a valid catalog.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The catalog file has invalid entries.
    #[error("{0} catalog validation errors found")]
    Validation(usize),

    /// Some catalog entries failed to insert.
    #[error("{0} catalog entries failed to insert")]
    PartialSeed(usize),
}

/// Pick the database URL from the flag, then the environment.
///
/// # Errors
///
/// Returns `CliError::MissingDatabaseUrl` if neither is set.
pub fn resolve_database_url(flag: Option<String>) -> Result<SecretString, CliError> {
    dotenvy::dotenv().ok();

    let url = flag
        .or_else(|| std::env::var("PHARMACY_DATABASE_URL").ok())
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .ok_or(CliError::MissingDatabaseUrl)?;

    let url = SecretString::from(url);
    if url.expose_secret().contains(":memory:") {
        tracing::warn!("In-memory database: changes are discarded when the command exits");
    }
    Ok(url)
}

/// Open the store and make sure the tables exist.
async fn connect(database_url: &SecretString) -> Result<sqlx::SqlitePool, CliError> {
    tracing::info!("Connecting to database...");
    let pool = db::create_pool(database_url, false).await?;
    db::schema::initialize(&pool).await?;
    Ok(pool)
}
