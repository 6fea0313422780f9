//! Shop context: the catalog plus the visitor's cart.
//!
//! [`ShopStore`] is the read/mutate contract the checkout and cart views are
//! written against. [`ShopContext`] implements it over the shared catalog and
//! a cart loaded from the visitor's session. All cart changes go through
//! [`ShopStore::set_cart_items`].

use std::sync::Arc;

use bazaar_core::{Cart, CurrencyCode, Price, Product, ProductId};
use thiserror::Error;
use tower_sessions::Session;

use crate::catalog::Catalog;
use crate::models::session_keys;

/// Errors from cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),
}

/// Read accessors and the single mutation entry point for shop state.
pub trait ShopStore {
    /// Catalog products in listing order.
    fn product_data(&self) -> &[Product];

    /// Current product-to-quantity mapping.
    fn cart_items(&self) -> &Cart;

    /// A cart with every catalog product at zero.
    fn get_default_cart(&self) -> Cart;

    /// Replace the cart.
    fn set_cart_items(&mut self, next: Cart);

    /// Catalog products with a positive quantity, in listing order.
    fn cart_products(&self) -> Vec<&Product> {
        let cart = self.cart_items();
        self.product_data()
            .iter()
            .filter(|product| cart.quantity(product.id) > 0)
            .collect()
    }

    /// Sum of unit price times quantity over the cart.
    fn get_total_cart_amount(&self) -> Price {
        let cart = self.cart_items();
        self.cart_products()
            .into_iter()
            .map(|product| product.unit_price().times(cart.quantity(product.id)))
            .fold(Price::zero(CurrencyCode::default()), |acc, line| acc + line)
    }

    /// Number of units in the cart (badge count).
    fn get_total_cart_items(&self) -> u32 {
        let cart = self.cart_items();
        self.cart_products()
            .into_iter()
            .fold(0, |acc, product| acc.saturating_add(cart.quantity(product.id)))
    }
}

/// Shop state for one request.
#[derive(Debug, Clone)]
pub struct ShopContext {
    catalog: Arc<Catalog>,
    cart: Cart,
    dirty: bool,
}

impl ShopContext {
    /// Create a context over a catalog and an existing cart.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>, cart: Cart) -> Self {
        Self {
            catalog,
            cart,
            dirty: false,
        }
    }

    /// Load the visitor's cart from the session.
    ///
    /// Visitors without a stored cart start with the default (empty) cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails or the stored cart cannot
    /// be decoded.
    pub async fn load(
        catalog: Arc<Catalog>,
        session: &Session,
    ) -> Result<Self, tower_sessions::session::Error> {
        let cart = session
            .get::<Cart>(session_keys::CART)
            .await?
            .unwrap_or_else(|| catalog.default_cart());
        Ok(Self::new(catalog, cart))
    }

    /// Write the cart back to the session if it changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn save(&mut self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        if self.dirty {
            session.insert(session_keys::CART, &self.cart).await?;
            self.dirty = false;
        }
        Ok(())
    }

    /// The shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether the cart changed since it was loaded or last saved.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] if the product is not in the catalog.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<(), CartError> {
        self.modify(id, |cart| cart.increment(id))
    }

    /// Remove one unit of a product; quantities never go below zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] if the product is not in the catalog.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<(), CartError> {
        self.modify(id, |cart| cart.decrement(id))
    }

    /// Set the quantity of a product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] if the product is not in the catalog.
    pub fn update_cart_item_count(&mut self, id: ProductId, quantity: u32) -> Result<(), CartError> {
        self.modify(id, |cart| cart.set_quantity(id, quantity))
    }

    fn modify(&mut self, id: ProductId, change: impl FnOnce(&mut Cart)) -> Result<(), CartError> {
        if !self.catalog.contains(id) {
            return Err(CartError::UnknownProduct(id));
        }
        let mut next = self.cart.clone();
        change(&mut next);
        self.set_cart_items(next);
        Ok(())
    }
}

impl ShopStore for ShopContext {
    fn product_data(&self) -> &[Product] {
        self.catalog.products()
    }

    fn cart_items(&self) -> &Cart {
        &self.cart
    }

    fn get_default_cart(&self) -> Cart {
        self.catalog.default_cart()
    }

    fn set_cart_items(&mut self, next: Cart) {
        self.cart = next;
        self.dirty = true;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use tower_sessions::MemoryStore;

    use super::*;

    const A: ProductId = ProductId::new(1);
    const B: ProductId = ProductId::new(2);
    const C: ProductId = ProductId::new(3);

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                Product::new(A, "A", Decimal::new(10000, 2)),
                Product::new(B, "B", Decimal::new(5000, 2)),
                Product::new(C, "C", Decimal::new(999, 2)),
            ])
            .unwrap(),
        )
    }

    fn context_with(lines: &[(ProductId, u32)]) -> ShopContext {
        let mut cart = Cart::new();
        for (id, quantity) in lines {
            cart.set_quantity(*id, *quantity);
        }
        ShopContext::new(catalog(), cart)
    }

    #[test]
    fn test_total_cart_amount() {
        let shop = context_with(&[(A, 2), (B, 1)]);
        assert_eq!(shop.get_total_cart_amount().to_string(), "Rs 250.00");
        assert_eq!(shop.get_total_cart_items(), 3);
    }

    #[test]
    fn test_cart_products_follow_catalog_order_and_skip_zero() {
        let shop = context_with(&[(C, 1), (A, 0), (B, 4)]);
        let ids: Vec<_> = shop.cart_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![B, C]);
    }

    #[test]
    fn test_unknown_cart_entries_are_ignored_in_totals() {
        let shop = context_with(&[(A, 1), (ProductId::new(99), 5)]);
        assert_eq!(shop.get_total_cart_amount().to_string(), "Rs 100.00");
        assert_eq!(shop.get_total_cart_items(), 1);
    }

    #[test]
    fn test_mutators() {
        let mut shop = context_with(&[]);
        assert!(!shop.is_dirty());

        shop.add_to_cart(A).unwrap();
        shop.add_to_cart(A).unwrap();
        shop.remove_from_cart(B).unwrap();
        shop.update_cart_item_count(C, 3).unwrap();

        assert!(shop.is_dirty());
        assert_eq!(shop.cart_items().quantity(A), 2);
        assert_eq!(shop.cart_items().quantity(B), 0);
        assert_eq!(shop.cart_items().quantity(C), 3);
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let mut shop = context_with(&[]);
        assert_eq!(
            shop.add_to_cart(ProductId::new(42)),
            Err(CartError::UnknownProduct(ProductId::new(42)))
        );
        assert!(!shop.is_dirty());
    }

    #[test]
    fn test_reset_to_default_cart() {
        let mut shop = context_with(&[(A, 2)]);
        let default = shop.get_default_cart();
        shop.set_cart_items(default);
        assert!(shop.cart_products().is_empty());
        assert_eq!(shop.cart_items().quantity(A), 0);
    }

    #[tokio::test]
    async fn test_session_roundtrip() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);

        let mut shop = ShopContext::load(catalog(), &session).await.unwrap();
        assert!(shop.cart_products().is_empty());
        shop.add_to_cart(B).unwrap();
        shop.save(&session).await.unwrap();
        assert!(!shop.is_dirty());

        let reloaded = ShopContext::load(catalog(), &session).await.unwrap();
        assert_eq!(reloaded.cart_items().quantity(B), 1);
    }
}
