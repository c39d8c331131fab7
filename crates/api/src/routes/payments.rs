//! Payment route handler.

use axum::{Json, extract::State, http::StatusCode};

use crate::db::PaymentRepository;
use crate::error::{Result, StoreResultExt};
use crate::extract::JsonBody;
use crate::models::NewPayment;
use crate::routes::{MessageResponse, created};
use crate::state::AppState;

/// Record a payment against an order.
///
/// # Errors
///
/// Returns `AppError::Store` if the insert fails.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payment): JsonBody<NewPayment>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let id = PaymentRepository::new(state.pool())
        .create(&payment)
        .await
        .or_fail("Failed to process payment")?;

    tracing::info!(payment_id = %id, order_id = %payment.order_id, "Payment recorded");
    Ok(created("Payment processed successfully"))
}
