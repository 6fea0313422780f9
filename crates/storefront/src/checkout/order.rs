//! Order placement.
//!
//! Submission is gated on validation: [`submit`] only runs [`place_order`]
//! once the billing form has no field errors. Placing an order resets the
//! cart and nothing else; the caller turns the outcome into a notification
//! and a redirect.

use crate::models::Notification;
use crate::shop::ShopStore;

use super::form::BillingForm;
use super::validation::{FieldErrors, validate};

/// Notification text after a successful order.
pub const ORDER_PLACED_MESSAGE: &str = "Order Placed Successfully";

/// Notification text when the cart has nothing in it.
pub const CART_EMPTY_MESSAGE: &str = "Your cart is empty";

/// Result of submitting the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Billing details failed validation; nothing else happened.
    Invalid(FieldErrors),
    /// The cart was empty; nothing changed.
    CartEmpty,
    /// The cart was reset to its default shape.
    Placed,
}

impl SubmitOutcome {
    /// The notification to show, if any. Validation failures are reported
    /// inline, next to each field.
    #[must_use]
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::Invalid(_) => None,
            Self::CartEmpty => Some(Notification::error(CART_EMPTY_MESSAGE)),
            Self::Placed => Some(Notification::success(ORDER_PLACED_MESSAGE)),
        }
    }
}

/// Validate the billing form, then place the order.
pub fn submit(form: &BillingForm, store: &mut impl ShopStore) -> SubmitOutcome {
    let errors = validate(form);
    if !errors.is_empty() {
        return SubmitOutcome::Invalid(errors);
    }
    place_order(store)
}

/// Reset the cart if it has anything in it.
///
/// Only call this with a validated form; [`submit`] does both.
pub fn place_order(store: &mut impl ShopStore) -> SubmitOutcome {
    if store.cart_products().is_empty() {
        return SubmitOutcome::CartEmpty;
    }

    let reset = store.get_default_cart();
    store.set_cart_items(reset);
    SubmitOutcome::Placed
}
