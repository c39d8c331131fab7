//! Schema commands.
//!
//! # Usage
//!
//! ```bash
//! pharmacy-cli schema init --database-url sqlite://pharmacy.db
//! ```
//!
//! The API creates its tables on startup, so this is only needed to prepare
//! a file-backed store ahead of time (or to seed it before first start).

use secrecy::SecretString;

use pharmacy_api::db::schema::Table;

use super::CliError;

/// Create any missing tables.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or a statement fails.
pub async fn init(database_url: &SecretString) -> Result<(), CliError> {
    let pool = super::connect(database_url).await?;

    let names: Vec<&str> = Table::ALL.iter().map(|table| table.name()).collect();
    tracing::info!(tables = ?names, "Schema ready");

    pool.close().await;
    Ok(())
}
