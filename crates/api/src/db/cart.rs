//! Cart repository.
//!
//! Cart lines are never merged or updated: each add inserts a row and each
//! remove deletes one row by primary key.

use sqlx::SqlitePool;

use pharmacy_core::{CartItemId, SqlValue};

use super::RepositoryError;
use crate::models::{CartItem, NewCartItem};

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the cart lines belonging to a user.
    ///
    /// `NULL` matches no rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: &SqlValue) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>("SELECT * FROM cart WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;
        Ok(items)
    }

    /// Add a line to a user's cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Constraint` if a field is missing.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add(&self, item: &NewCartItem) -> Result<CartItemId, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO cart (user_id, medication_id, quantity) VALUES (?, ?, ?)")
                .bind(&item.user_id)
                .bind(&item.medication_id)
                .bind(&item.quantity)
                .execute(self.pool)
                .await?;

        Ok(CartItemId::new(result.last_insert_rowid()))
    }

    /// Delete a cart line, returning how many rows were removed (0 or 1).
    ///
    /// The id is bound as text straight from the path. The comparison with
    /// the integer key applies numeric affinity, so `"1"` and `"1.0"` both
    /// match row 1 and anything non-numeric matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn remove(&self, id: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
