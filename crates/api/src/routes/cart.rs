//! Cart route handlers.
//!
//! `GET /cart` reads the owner from the JSON body rather than the path or
//! query string. Without a body the filter is `NULL` and the cart is empty.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::db::CartRepository;
use crate::error::{Result, StoreResultExt};
use crate::extract::JsonBody;
use crate::models::{CartItem, CartQuery, NewCartItem};
use crate::routes::{MessageResponse, created};
use crate::state::AppState;

/// List a user's cart lines.
///
/// # Errors
///
/// Returns `AppError::Store` if the query fails.
pub async fn show(
    State(state): State<AppState>,
    JsonBody(query): JsonBody<CartQuery>,
) -> Result<Json<Vec<CartItem>>> {
    let items = CartRepository::new(state.pool())
        .list_for_user(&query.user_id)
        .await
        .or_fail("Failed to retrieve cart")?;
    Ok(Json(items))
}

/// Add a line to a cart.
///
/// # Errors
///
/// Returns `AppError::Store` if the insert fails.
pub async fn add(
    State(state): State<AppState>,
    JsonBody(item): JsonBody<NewCartItem>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let id = CartRepository::new(state.pool())
        .add(&item)
        .await
        .or_fail("Failed to add medication to cart")?;

    tracing::debug!(cart_item_id = %id, "Cart line added");
    Ok(created("Medication added to cart successfully"))
}

/// Remove a cart line by id.
///
/// Succeeds whether or not a row was deleted. The path segment is handed to
/// the store as text and compared under the key's integer affinity.
///
/// # Errors
///
/// Returns `AppError::Store` if the delete fails.
pub async fn remove(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let removed = CartRepository::new(state.pool())
        .remove(&raw_id)
        .await
        .or_fail("Failed to remove medication from cart")?;

    tracing::debug!(id = %raw_id, removed, "Cart line removal");
    Ok(Json(MessageResponse {
        message: "Medication removed from cart successfully",
    }))
}
