//! Command implementations and the context they share.

pub mod browse;
pub mod cart;
pub mod products;

use std::path::PathBuf;

use shopfront_storefront::catalog::{CatalogClient, CatalogState};
use shopfront_storefront::config::StorefrontConfig;
use shopfront_storefront::storage::{FileStore, KeyValueStore, MemoryStore};
use shopfront_storefront::{Storefront, StorefrontError};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Storefront operation failed.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    /// Writing output or reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Text to show the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Storefront(e) => e.user_message(),
            Self::Io(e) => format!("I/O error: {e}"),
        }
    }
}

/// Storefront whose cart store is chosen at startup.
pub type CliStorefront = Storefront<Box<dyn KeyValueStore>>;

/// State shared by every command: the storefront and the catalog client.
pub struct Context {
    pub storefront: CliStorefront,
    client: CatalogClient,
}

impl Context {
    /// Load configuration and open the cart store.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the data directory
    /// cannot be created.
    pub fn open(ephemeral: bool, data_dir: Option<PathBuf>) -> Result<Self, CliError> {
        let mut config = StorefrontConfig::from_env().map_err(StorefrontError::from)?;
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }

        let store: Box<dyn KeyValueStore> = if ephemeral {
            tracing::info!("Using in-memory cart");
            Box::new(MemoryStore::new())
        } else {
            Box::new(FileStore::open(&config.data_dir).map_err(StorefrontError::from)?)
        };

        Ok(Self {
            storefront: Storefront::new(store, config.page_size),
            client: CatalogClient::new(&config.catalog),
        })
    }

    /// Fetch the catalog unless it has already been fetched.
    pub async fn ensure_catalog(&mut self) {
        if matches!(self.storefront.catalog_state(), CatalogState::Loading) {
            let result = self.client.fetch_products().await;
            self.storefront.load_catalog(result);
        }
    }
}
