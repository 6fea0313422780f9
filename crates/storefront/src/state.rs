//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{CatalogHandle, CatalogSource, spawn_catalog_load};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the process-wide catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogHandle,
}

impl AppState {
    /// Create a new application state with the catalog not yet loaded.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_catalog(config, CatalogHandle::new())
    }

    /// Create application state around an existing catalog handle.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: CatalogHandle) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog handle.
    #[must_use]
    pub fn catalog(&self) -> &CatalogHandle {
        &self.inner.catalog
    }

    /// Start loading the catalog in the background.
    ///
    /// Returns immediately; the catalog handle becomes ready when the load
    /// completes.
    pub fn start_catalog_loading(&self) -> tokio::task::JoinHandle<()> {
        let source = CatalogSource::from(self.config().catalog_path.clone());
        spawn_catalog_load(self.inner.catalog.clone(), source)
    }
}
