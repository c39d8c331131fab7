//! Order types.

use serde::{Deserialize, Serialize};

use pharmacy_core::{OrderId, SqlValue, Timestamp};

/// A placed order.
///
/// The reference and quantity columns keep whatever storage class the
/// client's value had after `INTEGER` affinity, e.g. `2.5` stays a real.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub user_id: SqlValue,
    pub medication_id: SqlValue,
    pub quantity: SqlValue,
    /// Assigned by the store at insert time.
    pub timestamp: Timestamp,
}

/// An order to place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewOrder {
    pub user_id: SqlValue,
    pub medication_id: SqlValue,
    pub quantity: SqlValue,
}
