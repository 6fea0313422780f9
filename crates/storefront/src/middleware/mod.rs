//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span with method, URI, status, latency)
//! 3. Request ID (recorded on the request span, echoed in the response)
//! 4. Security headers (CSP, frame and referrer policies)
//! 5. Session layer (tower-sessions over a bounded `moka` store)

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod shop;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{MokaSessionStore, create_session_layer};
pub use shop::Shop;
