//! Unified error handling.
//!
//! Provides a unified `StorefrontError` type. Front ends show
//! [`StorefrontError::user_message`] rather than the `Display` output so
//! transport and storage details stay in the logs.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;
use shopfront_core::PageSizeError;

/// Message shown in place of the listing when the catalog cannot be fetched.
pub const CATALOG_FAILURE_MESSAGE: &str = "Error: Failed to fetch products.";

/// Notice shown when checkout is attempted with an empty cart.
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty!";

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog fetch failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout attempted with no cart lines.
    #[error("Checkout attempted with an empty cart")]
    EmptyCartCheckout,

    /// Page size outside the selector's choices.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(#[from] PageSizeError),

    /// Key-value store operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// Text suitable for showing to the shopper.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Catalog(_) => CATALOG_FAILURE_MESSAGE.to_string(),
            Self::EmptyCartCheckout => EMPTY_CART_NOTICE.to_string(),
            Self::InvalidPageSize(e) => format!("Invalid page size: {e}"),
            Self::Storage(_) => "Could not access saved cart".to_string(),
            Self::Config(e) => e.to_string(),
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_error_display() {
        let err = StorefrontError::EmptyCartCheckout;
        assert_eq!(err.to_string(), "Checkout attempted with an empty cart");

        let err = StorefrontError::from(PageSizeError(3));
        assert_eq!(
            err.to_string(),
            "Invalid page size: page size 3 is not one of [5, 10, 20, 50]"
        );
    }

    #[test]
    fn test_user_messages_hide_details() {
        let err = StorefrontError::from(CatalogError::Status {
            status: 502,
            body: "upstream exploded".to_string(),
        });
        assert_eq!(err.user_message(), CATALOG_FAILURE_MESSAGE);

        let err = StorefrontError::from(StorageError::InvalidKey("../x".to_string()));
        assert!(!err.user_message().contains("../x"));

        assert_eq!(
            StorefrontError::EmptyCartCheckout.user_message(),
            EMPTY_CART_NOTICE
        );
    }
}
