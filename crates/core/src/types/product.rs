//! Catalog product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{CurrencyCode, Price};

/// A purchasable catalog entry.
///
/// Products are immutable once loaded; the storefront never edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Image URL or `/static` path.
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Create a product with only the required fields set.
    #[must_use]
    pub fn new(id: ProductId, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            description: None,
            category: None,
            image: None,
        }
    }

    /// Unit price in the store currency.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        Price::new(self.price, CurrencyCode::default())
    }
}
