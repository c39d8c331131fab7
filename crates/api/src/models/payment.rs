//! Payment types.
//!
//! A payment is a bare record that someone paid for an order from a phone
//! number. There is no amount or status, and nothing checks the order exists.

use serde::{Deserialize, Serialize};

use pharmacy_core::{PaymentId, SqlValue, Timestamp};

/// A recorded payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: SqlValue,
    pub phone_number: String,
    pub timestamp: Timestamp,
}

/// A payment to record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewPayment {
    pub order_id: SqlValue,
    pub phone_number: SqlValue,
}
