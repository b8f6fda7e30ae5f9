//! Product catalog: the fetched product list and its remote client.
//!
//! # Architecture
//!
//! - The catalog is fetched once at startup with a single GET (see [`CatalogClient`])
//! - The remote API is the source of truth; there is no cache and no refetch
//! - A failed fetch leaves the catalog in [`CatalogState::Failed`] until restart
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_storefront::catalog::{CatalogClient, CatalogState};
//!
//! let client = CatalogClient::new(&config.catalog);
//! let state = CatalogState::from_fetch(client.fetch_products().await);
//! ```

mod client;

pub use client::CatalogClient;

use shopfront_core::{Category, Product, ProductId};
use thiserror::Error;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog endpoint answered with a non-success status.
    #[error("Catalog endpoint returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Leading part of the response body, for diagnostics.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can resolve a product ID to a product.
pub trait ProductLookup {
    /// Find the product with `id`.
    fn product(&self, id: ProductId) -> Option<&Product>;
}

impl ProductLookup for [Product] {
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.iter().find(|p| p.id == id)
    }
}

impl ProductLookup for Vec<Product> {
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.as_slice().product(id)
    }
}

/// The fetched product list plus its derived category set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, keeping products in arrival order.
    ///
    /// Categories are the distinct product categories in first-seen order.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut categories: Vec<Category> = Vec::new();
        for product in &products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Self {
            products,
            categories,
        }
    }

    /// All products in arrival order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for Catalog {
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.as_slice().product(id)
    }
}

/// Lifecycle of the catalog: loading, loaded, or permanently failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogState {
    /// Fetch has not completed yet.
    #[default]
    Loading,
    /// Products are available.
    Ready(Catalog),
    /// Fetch failed; holds the error description.
    Failed(String),
}

impl CatalogState {
    /// Turn a fetch result into a catalog state, logging failures.
    #[must_use]
    pub fn from_fetch(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => {
                let catalog = Catalog::new(products);
                tracing::info!(
                    products = catalog.len(),
                    categories = catalog.categories().len(),
                    "Catalog loaded"
                );
                Self::Ready(catalog)
            }
            Err(e) => {
                tracing::error!(error = %e, "Catalog fetch failed");
                Self::Failed(e.to_string())
            }
        }
    }

    /// The loaded catalog, if any.
    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Products of the loaded catalog, or an empty slice.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Ready(catalog) => catalog.products(),
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    /// Categories of the loaded catalog, or an empty slice.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        match self {
            Self::Ready(catalog) => catalog.categories(),
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use shopfront_core::Price;

    fn product(id: i32, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(100),
            thumbnail: String::new(),
            category: Category::from(category),
        }
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::new(vec![
            product(1, "beauty"),
            product(2, "groceries"),
            product(3, "beauty"),
            product(4, "Beauty"),
        ]);
        let names: Vec<&str> = catalog.categories().iter().map(Category::as_str).collect();
        assert_eq!(names, ["beauty", "groceries", "Beauty"]);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![product(1, "a"), product(2, "b")]);
        assert_eq!(catalog.product(ProductId::new(2)).map(|p| p.id.as_i32()), Some(2));
        assert!(catalog.product(ProductId::new(9)).is_none());
    }

    #[test]
    fn test_failed_state_has_no_products() {
        let state = CatalogState::Failed("boom".to_string());
        assert!(state.products().is_empty());
        assert!(state.categories().is_empty());
        assert!(CatalogState::Loading.catalog().is_none());
    }

    #[test]
    fn test_from_fetch_error() {
        let err = CatalogError::Status {
            status: 503,
            body: String::new(),
        };
        let state = CatalogState::from_fetch(Err(err));
        assert_eq!(
            state,
            CatalogState::Failed("Catalog endpoint returned HTTP 503".to_string())
        );
    }

    #[test]
    fn test_catalog_error_display() {
        let err: CatalogError = serde_json::from_str::<Vec<Product>>("{").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
