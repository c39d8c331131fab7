//! Request fields are not type-checked: values go to the store as sent and
//! the columns' affinity decides what is kept.

#![allow(clippy::unwrap_used)]

use axum::http::{Method, StatusCode};
use serde_json::json;

use pharmacy_api::db::schema::Table;
use pharmacy_integration_tests::TestApp;

#[tokio::test]
async fn test_numeric_password_signs_up_and_logs_in() {
    let app = TestApp::new().await;

    let resp = app
        .post("/signup", &json!({"email": "a@x.com", "password": 1234}))
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);

    let resp = app
        .post("/login", &json!({"email": "a@x.com", "password": "1234"}))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["user"]["password"], "1234");

    let resp = app
        .post("/login", &json!({"email": "a@x.com", "password": 1234}))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_string_numbers_in_order_are_coerced() {
    let app = TestApp::new().await;

    let resp = app
        .post(
            "/orders",
            &json!({"user_id": "1", "medication_id": "2", "quantity": "3"}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body, json!({"message": "Order placed successfully"}));

    let resp = app.get("/orders").await;
    assert_eq!(resp.status, StatusCode::OK);
    let order = &resp.body[0];
    assert_eq!(order["user_id"], 1);
    assert_eq!(order["medication_id"], 2);
    assert_eq!(order["quantity"], 3);
}

#[tokio::test]
async fn test_non_numeric_order_values_are_listed_as_stored() {
    let app = TestApp::new().await;

    let resp = app
        .post(
            "/orders",
            &json!({"user_id": "anyone", "medication_id": 1, "quantity": 1.5}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);

    let resp = app.get("/orders").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body[0]["user_id"], "anyone");
    assert_eq!(resp.body[0]["quantity"], json!(1.5));
}

#[tokio::test]
async fn test_fractional_cart_quantity_is_kept() {
    let app = TestApp::new().await;

    let resp = app
        .post(
            "/cart",
            &json!({"user_id": 1, "medication_id": 1, "quantity": 2.5}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);

    let resp = app
        .request(Method::GET, "/cart", Some(&json!({"user_id": "1"})))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body.as_array().unwrap().len(), 1);
    assert_eq!(resp.body[0]["quantity"], json!(2.5));
}

#[tokio::test]
async fn test_string_price_is_stored_as_number() {
    let app = TestApp::new().await;

    let resp = app
        .post(
            "/medications",
            &json!({"name": "Ibuprofen", "form": "tablet", "dose": "200mg", "price": "5.99"}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);

    let resp = app.get("/medications").await;
    assert_eq!(resp.body[0]["price"], json!(5.99));
}

#[tokio::test]
async fn test_numeric_text_fields_are_stored_as_text() {
    let app = TestApp::new().await;

    let resp = app
        .post(
            "/medications",
            &json!({"name": 42, "form": true, "dose": {"mg": 200}, "price": 1}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);

    let resp = app.get("/medications").await;
    let medication = &resp.body[0];
    assert_eq!(medication["name"], "42");
    assert_eq!(medication["form"], "1");
    assert_eq!(medication["dose"], r#"{"mg":200}"#);
    assert_eq!(medication["price"], json!(1.0));
}

#[tokio::test]
async fn test_numeric_phone_number_is_accepted() {
    let app = TestApp::new().await;

    let resp = app
        .post(
            "/payments",
            &json!({"order_id": "9", "phone_number": 254_700_000_000_i64}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(app.count(Table::Payments).await, 1);
}

#[tokio::test]
async fn test_null_field_still_hits_not_null() {
    let app = TestApp::new().await;

    let resp = app
        .post(
            "/cart",
            &json!({"user_id": 1, "medication_id": null, "quantity": 1}),
        )
        .await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.body,
        json!({"error": "Failed to add medication to cart"})
    );
}

#[tokio::test]
async fn test_array_body_is_treated_as_no_fields() {
    let app = TestApp::new().await;

    let resp = app.post("/signup", &json!(["a@x.com", "p1"])).await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.body, json!({"error": "Failed to create user"}));
}

#[tokio::test]
async fn test_scalar_body_is_bad_request() {
    let app = TestApp::new().await;

    let resp = app.post("/signup", &json!("a@x.com")).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body, json!({"error": "Malformed request body"}));
}
