//! Bazaar Core - Shared types library.
//!
//! This crate provides the domain types used by the `storefront` crate:
//! product identifiers, prices, email addresses, catalog products and the
//! shopping cart.
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no sessions,
//! no HTTP. This keeps it lightweight and easy to test in isolation.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and emails, plus
//!   the `Product` and `Cart` domain types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
