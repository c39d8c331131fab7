//! Orders over HTTP.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use pharmacy_core::Timestamp;
use pharmacy_integration_tests::TestApp;

#[tokio::test]
async fn test_placed_order_is_listed_with_server_timestamp() {
    let app = TestApp::new().await;

    let before = Utc::now() - Duration::seconds(1);
    let resp = app
        .post(
            "/orders",
            &json!({"user_id": 1, "medication_id": 2, "quantity": 3}),
        )
        .await;
    let after = Utc::now() + Duration::seconds(1);

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body, json!({"message": "Order placed successfully"}));

    let resp = app.get("/orders").await;
    assert_eq!(resp.status, StatusCode::OK);
    let orders = resp.body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["user_id"], 1);
    assert_eq!(orders[0]["medication_id"], 2);
    assert_eq!(orders[0]["quantity"], 3);

    let timestamp = Timestamp::parse(orders[0]["timestamp"].as_str().unwrap()).unwrap();
    let at = timestamp.to_utc();
    assert!(at >= before && at <= after, "{at} not within request window");
}

#[tokio::test]
async fn test_orders_are_not_scoped_to_a_user() {
    let app = TestApp::new().await;
    for user_id in [1, 2] {
        let resp = app
            .post(
                "/orders",
                &json!({"user_id": user_id, "medication_id": 1, "quantity": 1}),
            )
            .await;
        assert_eq!(resp.status, StatusCode::CREATED);
    }

    let resp = app.get("/orders").await;
    assert_eq!(resp.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_quantity_is_not_validated() {
    let app = TestApp::new().await;
    let resp = app
        .post(
            "/orders",
            &json!({"user_id": 1, "medication_id": 1, "quantity": 0}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_order_without_quantity_fails() {
    let app = TestApp::new().await;
    let resp = app
        .post("/orders", &json!({"user_id": 1, "medication_id": 1}))
        .await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.body, json!({"error": "Failed to place order"}));
    assert_eq!(app.get("/orders").await.body, json!([]));
}
