//! HTTP client for the remote product catalog.
//!
//! Issues a single GET and expects `{"products": [...]}`. No retry, no cache.

use std::sync::Arc;

use serde::Deserialize;
use shopfront_core::Product;
use tracing::instrument;
use url::Url;

use super::CatalogError;
use crate::config::CatalogConfig;

/// Number of body characters kept in logs and errors.
const BODY_PREVIEW_CHARS: usize = 500;

/// Body shape of the product-list endpoint.
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

/// Client for the remote product-list endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Create a client for the configured endpoint.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_http_client(config.url.clone(), reqwest::Client::new())
    }

    /// Create a client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(endpoint: Url, client: reqwest::Client) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner { client, endpoint }),
        }
    }

    /// Endpoint this client fetches from.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Http` if the request fails, `CatalogError::Status`
    /// on a non-success status, and `CatalogError::Parse` on a malformed body.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .inner
            .client
            .get(self.inner.endpoint.as_str())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        let products = parse_products_response(status.as_u16(), &response_text)?;
        tracing::debug!(count = products.len(), "Fetched products");
        Ok(products)
    }
}

/// Validate the status and decode the product list from a response body.
fn parse_products_response(status: u16, body: &str) -> Result<Vec<Product>, CatalogError> {
    if !(200..300).contains(&status) {
        let preview = body.chars().take(BODY_PREVIEW_CHARS).collect::<String>();
        tracing::error!(
            status,
            body = %preview,
            "Catalog endpoint returned non-success status"
        );
        return Err(CatalogError::Status {
            status,
            body: preview,
        });
    }

    match serde_json::from_str::<ProductsResponse>(body) {
        Ok(response) => Ok(response.products),
        Err(e) => {
            tracing::error!(
                error = %e,
                body = %body.chars().take(BODY_PREVIEW_CHARS).collect::<String>(),
                "Failed to parse catalog response"
            );
            Err(CatalogError::Parse(e))
        }
    }
}
