//! Shop context extractor.
//!
//! Builds a [`ShopContext`] from the loaded catalog and the visitor's
//! session. While the catalog is still loading the extractor yields `None`
//! and handlers render the loading placeholder.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::shop::ShopContext;
use crate::state::AppState;

/// Extractor for the visitor's shop context, if the catalog is available.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Shop(shop): Shop) -> impl IntoResponse {
///     match shop {
///         Some(shop) => format!("{} items", shop.get_total_cart_items()),
///         None => "Loading...".to_string(),
///     }
/// }
/// ```
pub struct Shop(pub Option<ShopContext>);

impl FromRequestParts<AppState> for Shop {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(catalog) = state.catalog().get() else {
            return Ok(Self(None));
        };

        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        let shop = ShopContext::load(catalog, session).await?;
        Ok(Self(Some(shop)))
    }
}
