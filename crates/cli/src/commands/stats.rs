//! Row count report.

use secrecy::SecretString;

use pharmacy_api::db::schema::{self, Table};

use super::CliError;

/// Log the number of rows in every table.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or a count fails.
pub async fn show(database_url: &SecretString) -> Result<(), CliError> {
    let pool = super::connect(database_url).await?;

    tracing::info!("Table statistics");
    tracing::info!("================");
    for table in Table::ALL {
        let count = schema::count_rows(&pool, table).await?;
        tracing::info!("  {table}: {count}");
    }

    pool.close().await;
    Ok(())
}
