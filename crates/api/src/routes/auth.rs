//! Account route handlers: signup and login.
//!
//! Passwords are stored and compared in plain text, and a successful login
//! returns the stored row including the password. There are no sessions or
//! tokens; login only answers whether the credentials match.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::db::UserRepository;
use crate::error::{AppError, Result, StoreResultExt};
use crate::extract::JsonBody;
use crate::models::{Credentials, User};
use crate::routes::{MessageResponse, created};
use crate::state::AppState;

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: User,
}

/// Create an account.
///
/// Every storage failure, including a duplicate email, is a 500.
///
/// # Errors
///
/// Returns `AppError::Store` if the insert fails.
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    tracing::info!(email = %credentials.email, "Received signup request");

    let user_id = UserRepository::new(state.pool())
        .create(&credentials)
        .await
        .or_fail("Failed to create user")?;

    tracing::info!(%user_id, "User created successfully");
    Ok(created("User created successfully"))
}

/// Check credentials and return the matching user.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` if no user matches both fields.
/// Returns `AppError::Store` if the lookup fails.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<Json<LoginResponse>> {
    let user = UserRepository::new(state.pool())
        .find_by_credentials(&credentials)
        .await
        .or_fail("Login failed")?
        .ok_or(AppError::Unauthorized("Invalid credentials"))?;

    tracing::debug!(user_id = %user.id, "Login successful");
    Ok(Json(LoginResponse {
        message: "Login successful",
        user,
    }))
}
