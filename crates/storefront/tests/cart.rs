//! Router-level tests for the catalog pages, cart and health endpoints.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use common::{BACKPACK, BOTTLE, TEE, TestClient};

#[tokio::test]
async fn test_health_is_always_ok() {
    let mut client = TestClient::loading();
    let response = client.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_readiness_follows_catalog() {
    let mut loading = TestClient::loading();
    assert_eq!(
        loading.get("/health/ready").await.status,
        StatusCode::SERVICE_UNAVAILABLE
    );

    let mut ready = TestClient::new();
    assert_eq!(ready.get("/health/ready").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_home_lists_products() {
    let mut client = TestClient::new();

    let response = client.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Canvas Backpack"));
    assert!(response.body.contains("Rs 100.00"));
    assert!(response.body.contains("Steel Bottle"));
    assert!(response.body.contains("Rs 19.99"));
}

#[tokio::test]
async fn test_home_shows_loading_placeholder() {
    let mut client = TestClient::loading();

    let response = client.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Loading..."));
    assert!(!response.body.contains("Canvas Backpack"));
}

#[tokio::test]
async fn test_product_page_and_unknown_product() {
    let mut client = TestClient::new();

    let found = client.get(&format!("/products/{TEE}")).await;
    assert_eq!(found.status, StatusCode::OK);
    assert!(found.body.contains("Cotton Tee"));

    let missing = client.get("/products/404").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_redirects_back_and_counts() {
    let mut client = TestClient::new();

    let response = client
        .post_form(
            "/cart/add",
            &[("product_id", "1"), ("return_to", "/products/1")],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/products/1"));
    assert_eq!(client.cart_count().await, 1);
}

#[tokio::test]
async fn test_add_ignores_external_return_target() {
    let mut client = TestClient::new();

    let response = client
        .post_form(
            "/cart/add",
            &[("product_id", "1"), ("return_to", "https://evil.test/")],
        )
        .await;

    assert_eq!(response.location(), Some("/cart"));
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let mut client = TestClient::new();

    let response = client.post_form("/cart/add", &[("product_id", "99")]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(client.cart_count().await, 0);
}

#[tokio::test]
async fn test_remove_and_update_quantities() {
    let mut client = TestClient::new();
    client.add_to_cart(BACKPACK, 2).await;
    client.add_to_cart(BOTTLE, 1).await;

    let response = client.post_form("/cart/remove", &[("product_id", "1")]).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(client.cart_count().await, 2);

    // Removing below zero is a no-op
    client.post_form("/cart/remove", &[("product_id", "2")]).await;
    assert_eq!(client.cart_count().await, 2);

    client
        .post_form("/cart/update", &[("product_id", "3"), ("quantity", "5")])
        .await;
    assert_eq!(client.cart_count().await, 6);

    let cart = client.get("/cart").await;
    assert_eq!(cart.status, StatusCode::OK);
    assert!(cart.body.contains("Steel Bottle"));
    assert!(cart.body.contains("Rs 99.95"));
    // 1 x 100.00 + 5 x 19.99
    assert!(cart.body.contains("Rs 199.95"));
}

#[tokio::test]
async fn test_empty_cart_page() {
    let mut client = TestClient::new();

    let response = client.get("/cart").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_cart_mutation_while_loading_is_unavailable() {
    let mut client = TestClient::loading();

    let response = client.post_form("/cart/add", &[("product_id", "1")]).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(client.cart_count().await, 0);
}

#[tokio::test]
async fn test_responses_carry_request_id_and_security_headers() {
    let mut client = TestClient::new();

    let response = client.get("/").await;

    let request_id = response.headers.get("x-request-id").unwrap();
    assert!(!request_id.is_empty());
    assert!(response.headers.contains_key("content-security-policy"));
    assert_eq!(
        response.headers.get("x-content-type-options").unwrap(),
        "nosniff"
    );
}
