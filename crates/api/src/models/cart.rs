//! Cart types.

use serde::{Deserialize, Serialize};

use pharmacy_core::{CartItemId, SqlValue};

/// One pending cart line. Adding the same medication twice creates two lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: SqlValue,
    pub medication_id: SqlValue,
    pub quantity: SqlValue,
}

/// A cart line to add.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewCartItem {
    pub user_id: SqlValue,
    pub medication_id: SqlValue,
    pub quantity: SqlValue,
}

/// Owner filter for reading a cart, taken from the request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CartQuery {
    pub user_id: SqlValue,
}
