//! Upstream book catalog client

use async_trait::async_trait;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CatalogEnvelope},
};

/// Source of the seed listing
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog once. No retries; the caller decides when to try again.
    async fn fetch(&self) -> AppResult<Vec<Book>>;
}

/// Catalog backed by a fixed HTTP endpoint
#[derive(Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch(&self) -> AppResult<Vec<Book>> {
        tracing::debug!("Fetching catalog from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Catalog {} answered {}", self.url, status);
            return Err(AppError::Fetch(format!(
                "unexpected status code: {}",
                status.as_u16()
            )));
        }

        let envelope: CatalogEnvelope = response
            .json()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        tracing::info!("Fetched {} books from catalog", envelope.data.len());
        Ok(envelope.data)
    }
}
