//! Medication catalog over HTTP.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use pharmacy_integration_tests::TestApp;

#[tokio::test]
async fn test_empty_catalog_is_empty_list() {
    let app = TestApp::new().await;
    let resp = app.get("/medications").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, json!([]));
}

#[tokio::test]
async fn test_added_medication_is_listed_with_exact_price() {
    let app = TestApp::new().await;

    let resp = app
        .post(
            "/medications",
            &json!({"name": "Ibuprofen", "form": "tablet", "dose": "200mg", "price": 5.99}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body, json!({"message": "Medication added successfully"}));

    let resp = app.get("/medications").await;
    assert_eq!(resp.status, StatusCode::OK);
    let list = resp.body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Ibuprofen");
    assert_eq!(list[0]["form"], "tablet");
    assert_eq!(list[0]["dose"], "200mg");
    assert_eq!(list[0]["price"], json!(5.99));
    assert!(list[0]["id"].is_i64());
}

#[tokio::test]
async fn test_catalog_keeps_insertion_order() {
    let app = TestApp::new().await;
    for name in ["A", "B", "C"] {
        app.post(
            "/medications",
            &json!({"name": name, "form": "tablet", "dose": "1mg", "price": 1.0}),
        )
        .await;
    }

    let resp = app.get("/medications").await;
    let names: Vec<&str> = resp
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[tokio::test]
async fn test_incomplete_medication_is_rejected() {
    let app = TestApp::new().await;
    let resp = app
        .post("/medications", &json!({"name": "Ibuprofen", "form": "tablet"}))
        .await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.body, json!({"error": "Failed to add medication"}));

    assert_eq!(app.get("/medications").await.body, json!([]));
}
