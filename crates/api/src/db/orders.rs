//! Order repository.
//!
//! Orders are an append-only log. Placing one does not check that the user
//! or medication exists, does not touch stock, and does not compute a total.

use sqlx::SqlitePool;

use pharmacy_core::OrderId;

use super::RepositoryError;
use crate::models::{NewOrder, Order};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every order, across all users.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>("SELECT * FROM orders")
            .fetch_all(self.pool)
            .await?;
        Ok(orders)
    }

    /// Place an order. The timestamp is assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Constraint` if a field is missing.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, order: &NewOrder) -> Result<OrderId, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO orders (user_id, medication_id, quantity) VALUES (?, ?, ?)")
                .bind(&order.user_id)
                .bind(&order.medication_id)
                .bind(&order.quantity)
                .execute(self.pool)
                .await?;

        Ok(OrderId::new(result.last_insert_rowid()))
    }
}
