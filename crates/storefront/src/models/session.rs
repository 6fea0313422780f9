//! Session-related types.
//!
//! The storefront keeps no server-side records; everything a visitor owns
//! (their cart and pending notifications) lives in their session.

/// Session keys for storefront data.
pub mod keys {
    /// Key for the visitor's cart (`bazaar_core::Cart`).
    pub const CART: &str = "cart";

    /// Key for notifications waiting to be shown on the next page.
    pub const NOTIFICATIONS: &str = "notifications";
}
