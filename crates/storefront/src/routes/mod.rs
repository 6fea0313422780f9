//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Product listing (optionally ?category=)
//! GET  /products/{id}          - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add one unit (redirects back)
//! POST /cart/remove            - Remove one unit (redirects back)
//! POST /cart/update            - Set quantity (redirects back)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Billing form and order summary
//! POST /checkout               - Place order
//! ```
//!
//! Health endpoints and static files are mounted in `lib.rs`.

pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::filters;
use crate::models::Notification;
use crate::models::notification::take_notifications;
use crate::shop::{ShopContext, ShopStore};
use crate::state::AppState;

/// Data every full page shows in its header and toast area.
#[derive(Clone, Debug, Default)]
pub struct PageChrome {
    pub cart_count: u32,
    pub notifications: Vec<Notification>,
}

impl PageChrome {
    /// Build the chrome for a page render, draining pending notifications.
    pub async fn load(shop: &ShopContext, session: &Session) -> Self {
        Self {
            cart_count: shop.get_total_cart_items(),
            notifications: take_notifications(session).await,
        }
    }
}

/// Placeholder shown while the catalog is still loading.
#[derive(Template, WebTemplate)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub chrome: PageChrome,
}

impl LoadingTemplate {
    #[must_use]
    pub fn new() -> Self {
        Self {
            chrome: PageChrome::default(),
        }
    }
}

impl Default for LoadingTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product detail
        .route("/products/{id}", get(products::show))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::place_order))
}
