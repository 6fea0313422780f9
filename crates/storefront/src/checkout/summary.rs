//! Order summary derived from shop state.
//!
//! Recomputed on every render; nothing here is cached or stored.

use bazaar_core::{Price, ProductId};

use crate::shop::ShopStore;

/// One cart product in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub id: ProductId,
    pub title: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub subtotal: Price,
}

/// Cart lines in catalog order plus the cart total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub total: Price,
}

impl OrderSummary {
    /// Summarize the cart of a shop store.
    pub fn from_store(store: &impl ShopStore) -> Self {
        let cart = store.cart_items();
        let lines = store
            .cart_products()
            .into_iter()
            .map(|product| {
                let quantity = cart.quantity(product.id);
                let unit_price = product.unit_price();
                SummaryLine {
                    id: product.id,
                    title: product.title.clone(),
                    unit_price,
                    quantity,
                    subtotal: unit_price.times(quantity),
                }
            })
            .collect();

        Self {
            lines,
            total: store.get_total_cart_amount(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use bazaar_core::{Cart, Product};
    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::Catalog;
    use crate::shop::ShopContext;

    fn shop(lines: &[(i32, u32)]) -> ShopContext {
        let catalog = Catalog::new(vec![
            Product::new(ProductId::new(1), "Backpack", Decimal::new(10000, 2)),
            Product::new(ProductId::new(2), "Tee", Decimal::new(5000, 2)),
        ])
        .unwrap();
        let mut cart = Cart::new();
        for (id, quantity) in lines {
            cart.set_quantity(ProductId::new(*id), *quantity);
        }
        ShopContext::new(Arc::new(catalog), cart)
    }

    #[test]
    fn test_subtotals_and_total() {
        let summary = OrderSummary::from_store(&shop(&[(1, 2), (2, 1)]));

        let rendered: Vec<_> = summary
            .lines
            .iter()
            .map(|l| (l.title.as_str(), l.unit_price.to_string(), l.quantity, l.subtotal.to_string()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Backpack", "Rs 100.00".to_string(), 2, "Rs 200.00".to_string()),
                ("Tee", "Rs 50.00".to_string(), 1, "Rs 50.00".to_string()),
            ]
        );
        assert_eq!(summary.total.to_string(), "Rs 250.00");
    }

    #[test]
    fn test_empty_cart_summary() {
        let summary = OrderSummary::from_store(&shop(&[]));
        assert!(summary.is_empty());
        assert_eq!(summary.total.to_string(), "Rs 0.00");
    }

    #[test]
    fn test_summary_is_stable_across_renders() {
        let shop = shop(&[(2, 3)]);
        let first = OrderSummary::from_store(&shop);
        let second = OrderSummary::from_store(&shop);
        assert_eq!(first, second);
        assert!(!shop.is_dirty());
    }
}
