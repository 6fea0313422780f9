//! Product catalog.
//!
//! The catalog is loaded once, asynchronously, at startup from either a JSON
//! file (`STOREFRONT_CATALOG_PATH`) or the seed catalog bundled with the
//! binary. The app starts immediately with no catalog; a background task
//! loads it and swaps it in atomically when ready. Until then, pages that need
//! the catalog render a loading placeholder.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use bazaar_core::cart::MAX_QUANTITY_PER_ITEM;
use bazaar_core::{Cart, Product, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;

/// Seed catalog compiled into the binary.
pub const SEED_CATALOG: &str = include_str!("../content/catalog.json");

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
    #[error("product {0} is priced too high for a full cart total to be computed")]
    PriceOutOfRange(ProductId),
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

/// Where the catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog bundled with the binary.
    Seed,
    /// A JSON file on disk.
    File(PathBuf),
}

impl From<Option<PathBuf>> for CatalogSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Seed, Self::File)
    }
}

/// The immutable set of purchasable products, in listing order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products, rejecting duplicate IDs and bad prices.
    ///
    /// Prices must leave room for the largest possible cart: every product at
    /// [`MAX_QUANTITY_PER_ITEM`], summed, must still fit in a `Decimal`. Cart
    /// totals are then always computable.
    ///
    /// # Errors
    ///
    /// Returns an error if two products share an ID, a price is negative, or
    /// the largest possible cart total would overflow.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        let max_quantity = Decimal::from(MAX_QUANTITY_PER_ITEM);
        let mut max_total = Decimal::ZERO;
        for (position, product) in products.iter().enumerate() {
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(product.id));
            }
            max_total = product
                .price
                .checked_mul(max_quantity)
                .and_then(|line| max_total.checked_add(line))
                .ok_or(CatalogError::PriceOutOfRange(product.id))?;
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the products are invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a catalog from its source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub async fn load(source: &CatalogSource) -> Result<Self, CatalogError> {
        match source {
            CatalogSource::Seed => Self::from_json(SEED_CATALOG),
            CatalogSource::File(path) => {
                let json =
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(|source| CatalogError::Io {
                            path: path.clone(),
                            source,
                        })?;
                Self::from_json(&json)
            }
        }
    }

    /// All products in listing order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|position| self.products.get(*position))
    }

    /// Whether a product with this ID exists.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// A cart listing every catalog product at quantity zero.
    #[must_use]
    pub fn default_cart(&self) -> Cart {
        Cart::zeroed(self.products.iter().map(|p| p.id))
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter_map(|p| p.category.as_deref())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Shared handle to the catalog.
///
/// Starts empty and is populated by [`spawn_catalog_load`].
#[derive(Clone, Default)]
pub struct CatalogHandle {
    inner: Arc<RwLock<Option<Arc<Catalog>>>>,
}

impl CatalogHandle {
    /// Create a handle with no catalog loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle that is ready immediately.
    #[must_use]
    pub fn ready(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(Arc::new(catalog)))),
        }
    }

    /// The loaded catalog, or `None` while loading is still in progress.
    #[must_use]
    pub fn get(&self) -> Option<Arc<Catalog>> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    /// Check if the catalog is loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.get().is_some()
    }

    /// Install the loaded catalog. Called by the background loader task.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub(crate) fn set_ready(&self, catalog: Catalog) -> Result<(), CatalogError> {
        *self
            .inner
            .write()
            .map_err(|_| CatalogError::LockPoisoned)? = Some(Arc::new(catalog));
        Ok(())
    }
}

/// Load the catalog on a background task and install it into `handle`.
///
/// A failed load is logged; the handle then stays empty and pages keep
/// rendering the loading placeholder.
pub fn spawn_catalog_load(
    handle: CatalogHandle,
    source: CatalogSource,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = load_into(&handle, &source).await {
            tracing::error!(error = %e, ?source, "Failed to load catalog");
        }
    })
}

#[instrument(skip(handle))]
async fn load_into(handle: &CatalogHandle, source: &CatalogSource) -> Result<(), CatalogError> {
    let catalog = Catalog::load(source).await?;
    let count = catalog.len();
    handle.set_ready(catalog)?;
    tracing::info!(products = count, "Catalog loaded");
    Ok(())
}
