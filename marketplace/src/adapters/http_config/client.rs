//! HTTP marketplace configuration source
//!
//! Fetches the static catalog and bundle documents with one GET each.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::entities::{BundleDocument, CatalogDocument};
use crate::domain::ports::MarketplaceSource;
use crate::error::ConfigError;

/// Implementation of the marketplace source over HTTP
pub struct HttpMarketplaceSource {
    http: Client,
    base_url: String,
    tenant: String,
}

impl HttpMarketplaceSource {
    pub fn new(base_url: String, tenant: String, timeout: Duration) -> Result<Self, ConfigError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            tenant,
        })
    }

    fn document_url(&self, document: &str) -> String {
        format!(
            "{}/configs/{}/marketplace/{}",
            self.base_url, self.tenant, document
        )
    }

    async fn get_document<T: DeserializeOwned>(&self, document: &str) -> Result<T, ConfigError> {
        let url = self.document_url(document);
        tracing::debug!("Fetching {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConfigError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ConfigError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl MarketplaceSource for HttpMarketplaceSource {
    async fn fetch_catalog(&self) -> Result<CatalogDocument, ConfigError> {
        self.get_document("catalog.json").await
    }

    async fn fetch_bundles(&self) -> Result<BundleDocument, ConfigError> {
        self.get_document("bundles.json").await
    }
}
