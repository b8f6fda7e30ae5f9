//! Catalog product records.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId};

/// A product as returned by the remote catalog.
///
/// Read-only once fetched. Fields the API sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-unique product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Category name.
    pub category: Category,
}
