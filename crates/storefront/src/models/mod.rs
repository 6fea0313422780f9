//! Session-stored models for storefront.

pub mod notification;
pub mod session;

pub use notification::{Notification, NotificationLevel};
pub use session::keys as session_keys;
