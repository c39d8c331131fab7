//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. The HTTP mapping is
//! flat: any storage failure becomes a 500 carrying the
//! endpoint's generic message, whatever the underlying cause. The cause is
//! still logged (and captured to Sentry) so operators can tell a duplicate
//! email from a broken database.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// A storage operation failed. `message` is what the client sees.
    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },

    /// Credentials did not match a stored account.
    #[error("Unauthorized: {0}")]
    Unauthorized(&'static str),

    /// The request body could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(&'static str),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl AppError {
    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// The client-facing message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Store { message, .. } => *message,
            Self::Unauthorized(message) | Self::BadRequest(message) => *message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store { message, source } => match source {
                RepositoryError::Conflict(_) => {
                    tracing::warn!(error = %source, "{message}: duplicate key");
                }
                RepositoryError::Constraint(_) => {
                    tracing::warn!(error = %source, "{message}: constraint rejected row");
                }
                RepositoryError::Database(_) | RepositoryError::DataCorruption(_) => {
                    let event_id = sentry::capture_error(&self);
                    tracing::error!(
                        error = %self,
                        sentry_event_id = %event_id,
                        "Request error"
                    );
                }
            },
            Self::Unauthorized(_) | Self::BadRequest(_) => {
                tracing::debug!(error = %self, "Client error");
            }
        }

        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Attach a client-facing message to a repository result.
pub trait StoreResultExt<T> {
    /// Convert a `RepositoryError` into [`AppError::Store`] with `message`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if `self` is an error.
    fn or_fail(self, message: &'static str) -> Result<T>;
}

impl<T> StoreResultExt<T> for std::result::Result<T, RepositoryError> {
    fn or_fail(self, message: &'static str) -> Result<T> {
        self.map_err(|source| AppError::Store { message, source })
    }
}
