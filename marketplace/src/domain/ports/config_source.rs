//! Marketplace configuration source port
//!
//! Where the catalog and bundle documents come from. The production adapter
//! fetches them over HTTP; tests use in-memory sources.

use async_trait::async_trait;

use crate::domain::entities::{BundleDocument, CatalogDocument};
use crate::error::ConfigError;

/// Port trait for loading static marketplace configuration
#[async_trait]
pub trait MarketplaceSource: Send + Sync {
    /// Load `catalog.json`
    async fn fetch_catalog(&self) -> Result<CatalogDocument, ConfigError>;

    /// Load `bundles.json`
    async fn fetch_bundles(&self) -> Result<BundleDocument, ConfigError>;
}
