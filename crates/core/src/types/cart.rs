//! Shopping cart as a product-to-quantity mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Maximum quantity allowed per product.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// A shopping cart.
///
/// Maps product IDs to quantities. A product that is absent and a product
/// mapped to zero are both "not in the cart"; the distinction only exists so
/// a freshly reset cart can list every catalog product at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cart listing every given product at quantity zero.
    pub fn zeroed(ids: impl IntoIterator<Item = ProductId>) -> Self {
        Self {
            items: ids.into_iter().map(|id| (id, 0)).collect(),
        }
    }

    /// Quantity of a product, zero when absent.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.items.get(&id).copied().unwrap_or(0)
    }

    /// Set the quantity of a product, clamped to [`MAX_QUANTITY_PER_ITEM`].
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        self.items.insert(id, quantity.min(MAX_QUANTITY_PER_ITEM));
    }

    /// Add one unit of a product.
    pub fn increment(&mut self, id: ProductId) {
        let next = self.quantity(id).saturating_add(1);
        self.set_quantity(id, next);
    }

    /// Remove one unit of a product, never going below zero.
    pub fn decrement(&mut self, id: ProductId) {
        let next = self.quantity(id).saturating_sub(1);
        self.set_quantity(id, next);
    }

    /// Products with a positive quantity, in ID order.
    pub fn lines(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.items
            .iter()
            .filter(|(_, quantity)| **quantity > 0)
            .map(|(id, quantity)| (*id, *quantity))
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.values().fold(0, |acc, q| acc.saturating_add(*q))
    }

    /// Whether no product has a positive quantity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines().next().is_none()
    }
}
