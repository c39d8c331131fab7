//! User repository for database operations.
//!
//! Credentials are stored and compared as plain text; login is a single
//! `SELECT` matching both columns exactly.

use sqlx::SqlitePool;

use pharmacy_core::UserId;

use super::RepositoryError;
use crate::models::{Credentials, User};

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Constraint` if email or password is missing.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, credentials: &Credentials) -> Result<UserId, RepositoryError> {
        let result = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind(&credentials.email)
            .bind(&credentials.password)
            .execute(self.pool)
            .await?;

        Ok(UserId::new(result.last_insert_rowid()))
    }

    /// Find the user whose email and password both match exactly.
    ///
    /// A missing email or password binds `NULL`, which never compares equal,
    /// so the lookup simply finds nothing. A non-text value is compared under
    /// the columns' `TEXT` affinity, so password `1234` matches `"1234"`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE email = ? AND password = ?",
        )
        .bind(&credentials.email)
        .bind(&credentials.password)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }
}
