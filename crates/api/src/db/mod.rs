//! Database operations for the pharmacy SQLite store.
//!
//! ## Tables
//!
//! - `users` - Accounts (email + plaintext password)
//! - `medications` - The catalog
//! - `orders` - Placed orders, one medication per row
//! - `payments` - Payment records referencing an order
//! - `cart` - Pending cart items per user
//!
//! The tables are independent logs: nothing here links cart rows to orders or
//! orders to payments. Each repository method runs exactly one statement.
//!
//! # Schema
//!
//! Tables are created at process start by [`schema::initialize`]; there is no
//! migration history.

pub mod cart;
pub mod medications;
pub mod orders;
pub mod payments;
pub mod schema;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::SqlitePool;
use sqlx::error::ErrorKind;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use cart::CartRepository;
pub use medications::MedicationRepository;
pub use orders::OrderRepository;
pub use payments::PaymentRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx (I/O, syntax, pool exhaustion, ...).
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Data in the database could not be decoded into the row type.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Unique constraint violation (e.g., duplicate email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other declared constraint rejected the row (NOT NULL, foreign key, CHECK).
    #[error("constraint violation: {0}")]
    Constraint(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message().to_owned();
            match db_err.kind() {
                ErrorKind::UniqueViolation => return Self::Conflict(message),
                ErrorKind::NotNullViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::CheckViolation => return Self::Constraint(message),
                _ => {}
            }
        }

        if matches!(
            err,
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_)
        ) {
            return Self::DataCorruption(err.to_string());
        }

        Self::Database(err)
    }
}

/// Create the SQLite connection pool.
///
/// The pool holds exactly one connection that is never reaped: an in-memory
/// database only exists as long as its connection does, and SQLite serializes
/// writes anyway.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite::memory:` or `sqlite://pharmacy.db`
/// * `enforce_foreign_keys` - Whether to turn on `PRAGMA foreign_keys`
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be established.
pub async fn create_pool(
    database_url: &SecretString,
    enforce_foreign_keys: bool,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(enforce_foreign_keys);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Open a fresh in-memory store with the schema applied.
///
/// # Errors
///
/// Returns `RepositoryError` if the pool cannot be created or the schema fails.
pub async fn in_memory() -> Result<SqlitePool, RepositoryError> {
    let pool = create_pool(&SecretString::from("sqlite::memory:"), false).await?;
    schema::initialize(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_pool_keeps_state_between_queries() {
        let pool = in_memory().await.unwrap();

        sqlx::query("INSERT INTO medications (name, form, dose, price) VALUES ('A', 'tablet', '1mg', 1.0)")
            .execute(&pool)
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM medications")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_syntax_error_is_plain_database_error() {
        let pool = in_memory().await.unwrap();
        let err: RepositoryError = sqlx::query("SELEC nonsense")
            .execute(&pool)
            .await
            .unwrap_err()
            .into();
        assert!(matches!(err, RepositoryError::Database(_)));
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced_when_requested() {
        let pool = create_pool(&SecretString::from("sqlite::memory:"), true)
            .await
            .unwrap();
        schema::initialize(&pool).await.unwrap();

        let err: RepositoryError =
            sqlx::query("INSERT INTO cart (user_id, medication_id, quantity) VALUES (1, 1, 1)")
                .execute(&pool)
                .await
                .unwrap_err()
                .into();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }
}
