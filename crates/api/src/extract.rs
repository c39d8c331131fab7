//! Request body extractor.
//!
//! [`JsonBody`] behaves like a JSON body parser mounted in front of every
//! route: a body is only parsed when the request declares a JSON content type
//! and actually carries bytes. Anything else yields `T::default()`, i.e. every
//! field absent. This is what lets `GET /cart` without a body return an empty
//! list instead of failing.
//!
//! Only syntax is checked. A body must be a JSON object or array; a top-level
//! array carries no fields and also yields `T::default()`. Field values are
//! never type-checked here, request types take them as
//! [`pharmacy_core::SqlValue`] and leave the judgement to the store.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Message returned when a JSON body cannot be decoded.
pub const MALFORMED_BODY: &str = "Malformed request body";

/// Extractor for an optional JSON request body.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(JsonBody(order): JsonBody<NewOrder>) -> impl IntoResponse {
///     // order.quantity is None when the client left it out
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!(error = %err, "Failed to read request body");
            AppError::BadRequest(MALFORMED_BODY)
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!(error = %err, "Failed to decode JSON body");
            AppError::BadRequest(MALFORMED_BODY)
        })?;

        match value {
            Value::Object(_) => serde_json::from_value(value).map(Self).map_err(|err| {
                tracing::debug!(error = %err, "JSON body does not fit request type");
                AppError::BadRequest(MALFORMED_BODY)
            }),
            Value::Array(_) => Ok(Self(T::default())),
            _ => {
                tracing::debug!("JSON body is not an object or array");
                Err(AppError::BadRequest(MALFORMED_BODY))
            }
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
