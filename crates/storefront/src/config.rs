//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPFRONT_CATALOG_URL` - Product-list endpoint (default: `https://dummyjson.com/products`)
//! - `SHOPFRONT_DATA_DIR` - Directory holding the persisted cart (default: `<data dir>/shopfront`)
//! - `SHOPFRONT_PAGE_SIZE` - Initial products per page, one of 5, 10, 20, 50 (default: 10)

use std::path::PathBuf;

use shopfront_core::PageSize;
use thiserror::Error;
use url::Url;

/// Product-list endpoint used when `SHOPFRONT_CATALOG_URL` is unset.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";

/// Sub-directory of the platform data directory used by default.
const DATA_DIR_NAME: &str = "shopfront";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Remote catalog configuration
    pub catalog: CatalogConfig,
    /// Directory for the persisted cart slot
    pub data_dir: PathBuf,
    /// Page size the listing starts with
    pub page_size: PageSize,
}

/// Remote catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Product-list endpoint
    pub url: Url,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is invalid or no data directory
    /// can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog = CatalogConfig::from_lookup(&lookup)?;

        let data_dir = match lookup("SHOPFRONT_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()
                .ok_or_else(|| ConfigError::MissingEnvVar("SHOPFRONT_DATA_DIR".to_string()))?,
        };

        let page_size = match lookup("SHOPFRONT_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPFRONT_PAGE_SIZE".to_string(), e)
            })?,
            None => PageSize::default(),
        };

        Ok(Self {
            catalog,
            data_dir,
            page_size,
        })
    }
}

impl CatalogConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("SHOPFRONT_CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let url = Url::parse(&raw).map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPFRONT_CATALOG_URL".to_string(), e.to_string())
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "SHOPFRONT_CATALOG_URL".to_string(),
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        Ok(Self { url })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Platform data directory joined with the shopfront sub-directory.
fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME))
}

/// Parse a page size, accepting only the listing's selector choices.
///
/// # Errors
///
/// Returns a description of the problem when `raw` is not an allowed size.
pub fn parse_page_size(raw: &str) -> Result<PageSize, String> {
    let size = raw.trim().parse::<u32>().map_err(|e| e.to_string())?;
    PageSize::try_from(size).map_err(|e| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            StorefrontConfig::from_lookup(lookup_from(&[("SHOPFRONT_DATA_DIR", "/tmp/shop")]))
                .unwrap();
        assert_eq!(config.catalog.url.as_str(), DEFAULT_CATALOG_URL);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.page_size, PageSize::default());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("SHOPFRONT_CATALOG_URL", "http://localhost:8080/api/products"),
            ("SHOPFRONT_DATA_DIR", "/var/lib/shop"),
            ("SHOPFRONT_PAGE_SIZE", "20"),
        ]))
        .unwrap();
        assert_eq!(config.catalog.url.port(), Some(8080));
        assert_eq!(config.page_size.get(), 20);
    }

    #[test]
    fn test_invalid_page_size() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[
            ("SHOPFRONT_DATA_DIR", "/tmp/shop"),
            ("SHOPFRONT_PAGE_SIZE", "7"),
        ]));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "SHOPFRONT_PAGE_SIZE"));
    }

    #[test]
    fn test_invalid_catalog_url() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[
            ("SHOPFRONT_DATA_DIR", "/tmp/shop"),
            ("SHOPFRONT_CATALOG_URL", "not a url"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[
            ("SHOPFRONT_DATA_DIR", "/tmp/shop"),
            ("SHOPFRONT_CATALOG_URL", "file:///etc/passwd"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size(" 5 ").unwrap().get(), 5);
        assert!(parse_page_size("ten").is_err());
        assert!(parse_page_size("0").is_err());
    }
}
