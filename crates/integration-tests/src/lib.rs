//! Integration tests for the pharmacy API.
//!
//! Each test builds the full router over a fresh in-memory store and drives it
//! with `tower::ServiceExt::oneshot`, so no server or database needs to be
//! running.
//!
//! ```bash
//! cargo test -p pharmacy-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `accounts` - signup and login
//! - `catalog` - medication listing and creation
//! - `orders` - order placement and listing
//! - `payments` - payment recording
//! - `cart` - cart add, list, and remove
//! - `health` - liveness, readiness, request ids

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use pharmacy_api::{config::ApiConfig, db, state::AppState};

/// A fully wired application over its own in-memory store.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// A decoded response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// Build the app with default configuration and an empty store.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be created.
    pub async fn new() -> Self {
        let config = ApiConfig::from_lookup(|_| None).expect("default config is valid");
        let pool = db::in_memory().await.expect("in-memory store");
        let router = pharmacy_api::app(AppState::new(config, pool.clone()));
        Self { router, pool }
    }

    /// Send a request with an optional JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn request(&self, method: Method, uri: &str, body: Option<&Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        };
        self.send(request.expect("valid request")).await
    }

    /// Send a prepared request.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body cannot be read.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// Count rows in a table directly.
    ///
    /// # Panics
    ///
    /// Panics if the count query fails.
    pub async fn count(&self, table: db::schema::Table) -> i64 {
        db::schema::count_rows(&self.pool, table)
            .await
            .expect("count rows")
    }
}
