//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health              - Liveness check
//! GET    /health/ready        - Readiness check (database reachable)
//!
//! # Accounts
//! POST   /signup              - Create account
//! POST   /login               - Check credentials, return the stored user
//!
//! # Catalog
//! GET    /medications         - List catalog
//! POST   /medications         - Add catalog entry
//!
//! # Orders & payments
//! GET    /orders              - List all orders
//! POST   /orders              - Place order
//! POST   /payments            - Record payment
//!
//! # Cart
//! GET    /cart                - List a user's cart (user_id in JSON body)
//! POST   /cart                - Add cart line
//! DELETE /cart/{id}           - Remove cart line
//! ```
//!
//! Every handler runs exactly one statement. Success bodies are either the
//! listed rows or `{"message": ...}`; failures are `{"error": ...}`.

pub mod auth;
pub mod cart;
pub mod health;
pub mod medications;
pub mod orders;
pub mod payments;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{delete, get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// Body of a successful write.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// A `201 Created` response carrying `message`.
#[must_use]
pub const fn created(message: &'static str) -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::CREATED, Json(MessageResponse { message }))
}

/// Create the health check routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Accounts
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        // Catalog
        .route(
            "/medications",
            get(medications::index).post(medications::create),
        )
        // Orders & payments
        .route("/orders", get(orders::index).post(orders::create))
        .route("/payments", post(payments::create))
        // Cart
        .route("/cart", get(cart::show).post(cart::add))
        .route("/cart/{id}", delete(cart::remove))
        .merge(health_routes())
}
