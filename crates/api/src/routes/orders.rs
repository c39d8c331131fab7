//! Order route handlers.
//!
//! `GET /orders` is not scoped to a user: it returns every order in the store.

use axum::{Json, extract::State, http::StatusCode};

use crate::db::OrderRepository;
use crate::error::{Result, StoreResultExt};
use crate::extract::JsonBody;
use crate::models::{NewOrder, Order};
use crate::routes::{MessageResponse, created};
use crate::state::AppState;

/// List every order.
///
/// # Errors
///
/// Returns `AppError::Store` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool())
        .list()
        .await
        .or_fail("Failed to retrieve orders")?;
    Ok(Json(orders))
}

/// Place an order.
///
/// # Errors
///
/// Returns `AppError::Store` if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(order): JsonBody<NewOrder>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let id = OrderRepository::new(state.pool())
        .create(&order)
        .await
        .or_fail("Failed to place order")?;

    tracing::info!(order_id = %id, user_id = %order.user_id, "Order placed");
    Ok(created("Order placed successfully"))
}
