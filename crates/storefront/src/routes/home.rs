//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use bazaar_core::{Product, ProductId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{LoadingTemplate, PageChrome};
use crate::filters;
use crate::middleware::Shop;
use crate::shop::ShopStore;

/// Product card display data for templates.
#[derive(Clone, Debug)]
pub struct ProductCardView {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub in_cart: u32,
}

impl ProductCardView {
    /// Build a card for a product with the visitor's cart quantity.
    #[must_use]
    pub fn new(product: &Product, in_cart: u32) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.unit_price().to_string(),
            category: product.category.clone(),
            image: product.image.clone(),
            in_cart,
        }
    }
}

/// Category filter link display data.
#[derive(Clone, Debug)]
pub struct CategoryView {
    pub name: String,
    pub selected: bool,
}

/// Listing filters.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub category: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    pub products: Vec<ProductCardView>,
    pub categories: Vec<CategoryView>,
    pub selected_category: Option<String>,
}

/// Display the product listing.
#[instrument(skip(session, shop))]
pub async fn home(
    session: Session,
    Shop(shop): Shop,
    Query(query): Query<HomeQuery>,
) -> Response {
    let Some(shop) = shop else {
        return LoadingTemplate::new().into_response();
    };

    let selected_category = query.category.filter(|c| !c.is_empty());
    let cart = shop.cart_items();
    let products = shop
        .product_data()
        .iter()
        .filter(|product| match &selected_category {
            Some(category) => product.category.as_deref() == Some(category.as_str()),
            None => true,
        })
        .map(|product| ProductCardView::new(product, cart.quantity(product.id)))
        .collect();
    let categories = shop
        .catalog()
        .categories()
        .into_iter()
        .map(|name| CategoryView {
            name: name.to_string(),
            selected: selected_category.as_deref() == Some(name),
        })
        .collect();

    HomeTemplate {
        chrome: PageChrome::load(&shop, &session).await,
        products,
        categories,
        selected_category,
    }
    .into_response()
}
