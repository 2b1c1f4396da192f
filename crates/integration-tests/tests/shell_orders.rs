//! Integration tests for the native orders view.
//!
//! A stub orders API runs in-process; the shell is pointed at it and
//! driven over HTTP.

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use csom_core::Order;
use csom_integration_tests::{no_redirect_client, serve, spawn_shell};

/// The canonical one-order listing from the orders API.
fn paid_order() -> Value {
    json!({
        "id": "1",
        "customerId": "c1",
        "status": "PAID",
        "totalAmount": 9.5,
        "createdAt": "2024-01-01T00:00:00Z",
        "items": [{"productId": "p1", "quantity": 2, "price": 4.75}]
    })
}

/// Stub orders API serving one order and accepting creates.
fn orders_api() -> Router {
    Router::new().route(
        "/api/v1/orders",
        get(|| async { Json(json!([paid_order()])) }).post(create_order),
    )
}

async fn create_order(Json(draft): Json<Value>) -> (StatusCode, Json<Value>) {
    // Echo the draft back as a created order the way the order service does.
    let items = draft.get("items").cloned().unwrap_or_else(|| json!([]));
    (
        StatusCode::CREATED,
        Json(json!({
            "id": "server-assigned-2",
            "customerId": "c1",
            "status": "PENDING",
            "totalAmount": 9.5,
            "createdAt": "2024-01-02T00:00:00Z",
            "items": items
        })),
    )
}

/// Stub orders API that always fails.
fn failing_orders_api() -> Router {
    Router::new().route(
        "/api/v1/orders",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") })
            .post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    )
}

#[tokio::test]
async fn test_orders_view_renders_fetched_orders() {
    let api = serve(orders_api()).await;
    let shell = spawn_shell(&format!("http://{api}"), "http://127.0.0.1:9", Duration::from_secs(5)).await;

    let body = reqwest::get(format!("{shell}/orders"))
        .await
        .expect("shell unreachable")
        .text()
        .await
        .expect("body");

    // One order, rendered with the money filter and verbatim status.
    assert!(body.contains("Order #1"), "missing order card: {body}");
    assert!(body.contains("$9.50"), "missing formatted total: {body}");
    assert!(body.contains("PAID"), "missing status: {body}");
    assert!(body.contains("$4.75"), "missing item price: {body}");
    assert!(!body.contains("Error:"), "unexpected error state: {body}");
}

#[tokio::test]
async fn test_failing_upstream_renders_error_state() {
    let api = serve(failing_orders_api()).await;
    let shell = spawn_shell(&format!("http://{api}"), "http://127.0.0.1:9", Duration::from_secs(5)).await;

    let response = reqwest::get(format!("{shell}/orders"))
        .await
        .expect("shell unreachable");

    // The error is a view state, not an HTTP failure of the shell itself.
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("body");
    assert!(body.contains("Error:"), "missing error state: {body}");
    assert!(!body.contains("Order #"), "unexpected order card: {body}");
}

#[tokio::test]
async fn test_create_redirects_back_to_orders() {
    let api = serve(orders_api()).await;
    let shell = spawn_shell(&format!("http://{api}"), "http://127.0.0.1:9", Duration::from_secs(5)).await;

    let response = no_redirect_client()
        .post(format!("{shell}/orders/create"))
        .form(&[("product_id", "p1"), ("quantity", "2"), ("price", "4.75")])
        .send()
        .await
        .expect("shell unreachable");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok());
    assert_eq!(location, Some("/orders"));
}

#[tokio::test]
async fn test_create_with_zero_quantity_is_rejected() {
    let api = serve(orders_api()).await;
    let shell = spawn_shell(&format!("http://{api}"), "http://127.0.0.1:9", Duration::from_secs(5)).await;

    let response = no_redirect_client()
        .post(format!("{shell}/orders/create"))
        .form(&[("product_id", "p1"), ("quantity", "0"), ("price", "4.75")])
        .send()
        .await
        .expect("shell unreachable");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.expect("body");
    assert!(body.contains("quantity"), "missing validation detail: {body}");
}

#[tokio::test]
async fn test_create_failure_propagates_as_bad_gateway() {
    let api = serve(failing_orders_api()).await;
    let shell = spawn_shell(&format!("http://{api}"), "http://127.0.0.1:9", Duration::from_secs(5)).await;

    let response = no_redirect_client()
        .post(format!("{shell}/orders/create"))
        .form(&[("product_id", "p1"), ("quantity", "2"), ("price", "4.75")])
        .send()
        .await
        .expect("shell unreachable");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_stub_payload_matches_wire_model() {
    // Guard the stub against drifting from the shell's order model.
    let order: Order = serde_json::from_value(paid_order()).expect("stub payload should parse");
    assert_eq!(order.status, "PAID");
    assert_eq!(order.items.len(), 1);
}

#[tokio::test]
async fn test_health_endpoints() {
    let api = serve(orders_api()).await;
    let shell = spawn_shell(&format!("http://{api}"), "http://127.0.0.1:9", Duration::from_secs(5)).await;

    let health = reqwest::get(format!("{shell}/health"))
        .await
        .expect("shell unreachable");
    assert_eq!(health.status(), StatusCode::OK);

    let ready = reqwest::get(format!("{shell}/health/ready"))
        .await
        .expect("shell unreachable");
    assert_eq!(ready.status(), StatusCode::OK);
}
