//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::Path,
    response::{IntoResponse, Response},
};
use bazaar_core::ProductId;
use tower_sessions::Session;
use tracing::instrument;

use super::{LoadingTemplate, PageChrome};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::Shop;
use crate::shop::ShopStore;

/// Product display data for templates.
#[derive(Clone, Debug)]
pub struct ProductView {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub in_cart: u32,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub chrome: PageChrome,
    pub product: ProductView,
}

/// Display product detail page.
#[instrument(skip(session, shop))]
pub async fn show(
    session: Session,
    Shop(shop): Shop,
    Path(id): Path<ProductId>,
) -> Result<Response> {
    let Some(shop) = shop else {
        return Ok(LoadingTemplate::new().into_response());
    };

    let product = shop
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let view = ProductView {
        id: product.id,
        title: product.title.clone(),
        price: product.unit_price().to_string(),
        description: product.description.clone(),
        category: product.category.clone(),
        image: product.image.clone(),
        in_cart: shop.cart_items().quantity(product.id),
    };

    Ok(ProductShowTemplate {
        chrome: PageChrome::load(&shop, &session).await,
        product: view,
    }
    .into_response())
}
