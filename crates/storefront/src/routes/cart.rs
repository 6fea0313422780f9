//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Mutations are plain form posts
//! that redirect back to the page they came from.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use bazaar_core::ProductId;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{LoadingTemplate, PageChrome};
use crate::checkout::OrderSummary;
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::Shop;
use crate::shop::{ShopContext, ShopStore};

/// Where cart mutations redirect when the form names no valid target.
const DEFAULT_RETURN_TO: &str = "/cart";

/// Cart line display data for templates.
#[derive(Clone, Debug)]
pub struct CartLineView {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub quantity: u32,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone, Debug)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Build the cart view from the visitor's shop state.
    #[must_use]
    pub fn from_shop(shop: &ShopContext) -> Self {
        let summary = OrderSummary::from_store(shop);
        Self {
            lines: summary
                .lines
                .into_iter()
                .map(|line| CartLineView {
                    id: line.id,
                    title: line.title,
                    price: line.unit_price.to_string(),
                    quantity: line.quantity,
                    line_price: line.subtotal.to_string(),
                })
                .collect(),
            total: summary.total.to_string(),
            item_count: shop.get_total_cart_items(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Add or remove form data.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub product_id: ProductId,
    pub return_to: Option<String>,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub quantity: u32,
    pub return_to: Option<String>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub chrome: PageChrome,
    pub cart: CartView,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Resolve a redirect target, allowing only local absolute paths.
fn safe_return_to(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => DEFAULT_RETURN_TO,
    }
}

/// Persist a changed cart and redirect back.
async fn save_and_return(
    mut shop: ShopContext,
    session: &Session,
    return_to: Option<&str>,
) -> Result<Response> {
    shop.save(session).await?;
    Ok(Redirect::to(safe_return_to(return_to)).into_response())
}

/// Response for cart mutations attempted before the catalog is ready.
fn unavailable() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, LoadingTemplate::new()).into_response()
}

/// Display cart page.
#[instrument(skip(session, shop))]
pub async fn show(session: Session, Shop(shop): Shop) -> Response {
    let Some(shop) = shop else {
        return LoadingTemplate::new().into_response();
    };

    CartShowTemplate {
        cart: CartView::from_shop(&shop),
        chrome: PageChrome::load(&shop, &session).await,
    }
    .into_response()
}

/// Add one unit of a product.
#[instrument(skip(session, shop))]
pub async fn add(
    session: Session,
    Shop(shop): Shop,
    Form(form): Form<CartItemForm>,
) -> Result<Response> {
    let Some(mut shop) = shop else {
        return Ok(unavailable());
    };

    shop.add_to_cart(form.product_id)?;
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", &form.product_id.to_string())]),
    );
    save_and_return(shop, &session, form.return_to.as_deref()).await
}

/// Remove one unit of a product.
#[instrument(skip(session, shop))]
pub async fn remove(
    session: Session,
    Shop(shop): Shop,
    Form(form): Form<CartItemForm>,
) -> Result<Response> {
    let Some(mut shop) = shop else {
        return Ok(unavailable());
    };

    shop.remove_from_cart(form.product_id)?;
    save_and_return(shop, &session, form.return_to.as_deref()).await
}

/// Set the quantity of a product.
#[instrument(skip(session, shop))]
pub async fn update(
    session: Session,
    Shop(shop): Shop,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let Some(mut shop) = shop else {
        return Ok(unavailable());
    };

    shop.update_cart_item_count(form.product_id, form.quantity)?;
    save_and_return(shop, &session, form.return_to.as_deref()).await
}

/// Get cart count badge.
#[instrument(skip(shop))]
pub async fn count(Shop(shop): Shop) -> impl IntoResponse {
    let count = shop.map_or(0, |shop| shop.get_total_cart_items());
    CartCountTemplate { count }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_to_accepts_local_paths() {
        assert_eq!(safe_return_to(Some("/")), "/");
        assert_eq!(safe_return_to(Some("/products/3")), "/products/3");
        assert_eq!(safe_return_to(Some("/?category=Home")), "/?category=Home");
    }

    #[test]
    fn test_safe_return_to_rejects_external_targets() {
        assert_eq!(safe_return_to(None), DEFAULT_RETURN_TO);
        assert_eq!(safe_return_to(Some("")), DEFAULT_RETURN_TO);
        assert_eq!(safe_return_to(Some("https://evil.test")), DEFAULT_RETURN_TO);
        assert_eq!(safe_return_to(Some("//evil.test")), DEFAULT_RETURN_TO);
        assert_eq!(safe_return_to(Some("/\\evil.test")), DEFAULT_RETURN_TO);
    }
}
