//! Checkout: billing form, validation, order summary and order placement.
//!
//! Placing an order is UI-only: it validates the billing details, resets the
//! cart and reports the outcome. No order record is created anywhere.

pub mod form;
pub mod order;
pub mod summary;
pub mod validation;

pub use form::{BillingField, BillingForm, PaymentMethod};
pub use order::{CART_EMPTY_MESSAGE, ORDER_PLACED_MESSAGE, SubmitOutcome, place_order, submit};
pub use summary::{OrderSummary, SummaryLine};
pub use validation::{FieldErrors, validate};
