//! Shared helpers for router-level tests.
//!
//! Requests are driven straight through the axum `Router` with
//! `tower::ServiceExt::oneshot`; no server or network is involved.

#![allow(dead_code, clippy::unwrap_used, clippy::indexing_slicing)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use bazaar_core::{Product, ProductId};
use bazaar_storefront::catalog::{Catalog, CatalogHandle};
use bazaar_storefront::config::StorefrontConfig;
use bazaar_storefront::state::AppState;
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Product priced at Rs 100.00.
pub const BACKPACK: ProductId = ProductId::new(1);
/// Product priced at Rs 50.00.
pub const TEE: ProductId = ProductId::new(2);
/// Product priced at Rs 19.99.
pub const BOTTLE: ProductId = ProductId::new(3);

/// A small catalog with round prices.
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(BACKPACK, "Canvas Backpack", Decimal::new(10000, 2)),
        Product::new(TEE, "Cotton Tee", Decimal::new(5000, 2)),
        Product::new(BOTTLE, "Steel Bottle", Decimal::new(1999, 2)),
    ])
    .unwrap()
}

/// A response with its body collected.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// A browser-like client: one app, one session cookie.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// Client for a storefront whose catalog is already loaded.
    pub fn new() -> Self {
        Self::with_catalog(CatalogHandle::ready(test_catalog()))
    }

    /// Client for a storefront still loading its catalog.
    pub fn loading() -> Self {
        Self::with_catalog(CatalogHandle::new())
    }

    pub fn with_catalog(catalog: CatalogHandle) -> Self {
        let state = AppState::with_catalog(StorefrontConfig::default(), catalog);
        Self {
            app: bazaar_storefront::app(state),
            cookie: None,
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish();
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    /// Add `quantity` units of a product to the cart.
    pub async fn add_to_cart(&mut self, id: ProductId, quantity: u32) {
        let id = id.to_string();
        for _ in 0..quantity {
            let response = self
                .post_form("/cart/add", &[("product_id", &id), ("return_to", "/")])
                .await;
            assert_eq!(response.status, StatusCode::SEE_OTHER);
        }
    }

    /// The cart badge count.
    pub async fn cart_count(&mut self) -> u32 {
        let response = self.get("/cart/count").await;
        assert_eq!(response.status, StatusCode::OK);
        let start = response.body.find('>').unwrap() + 1;
        let end = response.body[start..].find('<').unwrap() + start;
        response.body[start..end].trim().parse().unwrap()
    }

    async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }

        let response = self.app.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
        {
            let pair = set_cookie.split(';').next().unwrap().to_string();
            self.cookie = Some(pair);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// A complete, valid set of billing details.
pub fn valid_billing() -> Vec<(&'static str, &'static str)> {
    vec![
        ("firstName", "Asha"),
        ("lastName", "Iyer"),
        ("companyName", ""),
        ("streetAddress", "12 MG Road"),
        ("city", "Bengaluru"),
        ("zipCode", "560001"),
        ("phone", "+91 98450 00000"),
        ("email", "asha@example.in"),
        ("additionalInfo", ""),
        ("paymentMethod", "directBankTransfer"),
    ]
}

/// Valid billing details with one field replaced.
pub fn billing_with(field: &str, value: &'static str) -> Vec<(&'static str, &'static str)> {
    valid_billing()
        .into_iter()
        .map(|(name, v)| if name == field { (name, value) } else { (name, v) })
        .collect()
}
