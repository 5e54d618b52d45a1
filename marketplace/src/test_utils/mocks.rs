//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Bundle, BundleDocument, CatalogDocument, MigrationRules, Product,
};
use crate::domain::ports::{AnalyticsEvent, AnalyticsSink, MarketplaceSource};
use crate::error::{AnalyticsError, ConfigError};

// ============================================================================
// In-Memory Marketplace Source
// ============================================================================

#[derive(Default)]
pub struct InMemoryMarketplaceSource {
    products: Arc<RwLock<Vec<Product>>>,
    bundles: Arc<RwLock<Vec<Bundle>>>,
    migration_rules: Arc<RwLock<Option<MigrationRules>>>,
}

impl InMemoryMarketplaceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the catalog
    pub fn with_products(self, products: Vec<Product>) -> Self {
        *self.products.write().unwrap() = products;
        self
    }

    /// Pre-populate the bundle list
    pub fn with_bundles(self, bundles: Vec<Bundle>) -> Self {
        *self.bundles.write().unwrap() = bundles;
        self
    }

    pub fn with_migration_rules(self, rules: MigrationRules) -> Self {
        *self.migration_rules.write().unwrap() = Some(rules);
        self
    }
}

#[async_trait]
impl MarketplaceSource for InMemoryMarketplaceSource {
    async fn fetch_catalog(&self) -> Result<CatalogDocument, ConfigError> {
        Ok(CatalogDocument {
            products: self.products.read().unwrap().clone(),
        })
    }

    async fn fetch_bundles(&self) -> Result<BundleDocument, ConfigError> {
        Ok(BundleDocument {
            bundles: self.bundles.read().unwrap().clone(),
            migration_rules: self.migration_rules.read().unwrap().clone(),
        })
    }
}

// ============================================================================
// Failing Marketplace Source
// ============================================================================

/// A source whose documents never load
pub struct FailingMarketplaceSource;

#[async_trait]
impl MarketplaceSource for FailingMarketplaceSource {
    async fn fetch_catalog(&self) -> Result<CatalogDocument, ConfigError> {
        Err(ConfigError::Status {
            status: 404,
            url: "http://localhost/configs/hivefy/marketplace/catalog.json".to_string(),
        })
    }

    async fn fetch_bundles(&self) -> Result<BundleDocument, ConfigError> {
        Err(ConfigError::Deserialization(
            "expected value at line 1 column 1".to_string(),
        ))
    }
}

// ============================================================================
// Mock Analytics Sinks
// ============================================================================

/// A mock analytics sink that records events
#[derive(Default)]
pub struct RecordingAnalyticsSink {
    pub events: Arc<RwLock<Vec<AnalyticsEvent>>>,
}

impl RecordingAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.read().unwrap().clone()
    }

    /// Events are delivered on spawned tasks. Yield until `expected` have
    /// arrived (or a bounded number of rounds has passed) and return them.
    pub async fn events_after_flush(&self, expected: usize) -> Vec<AnalyticsEvent> {
        for _ in 0..100 {
            if self.events.read().unwrap().len() >= expected {
                break;
            }
            tokio::task::yield_now().await;
        }
        // give stragglers a chance so tests can assert on "no more than"
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        self.events()
    }

    pub fn clear(&self) {
        self.events.write().unwrap().clear();
    }

    pub async fn names_after_flush(&self, expected: usize) -> Vec<&'static str> {
        self.events_after_flush(expected)
            .await
            .iter()
            .map(AnalyticsEvent::name)
            .collect()
    }
}

#[async_trait]
impl AnalyticsSink for RecordingAnalyticsSink {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.events.write().unwrap().push(event);
        Ok(())
    }
}

/// A sink whose collector always rejects. Counts delivery attempts.
#[derive(Default)]
pub struct FailingAnalyticsSink {
    calls: AtomicUsize,
}

impl FailingAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Yield until `expected` delivery attempts were made, then return the count
    pub async fn calls_after_flush(&self, expected: usize) -> usize {
        for _ in 0..100 {
            if self.calls() >= expected {
                break;
            }
            tokio::task::yield_now().await;
        }
        self.calls()
    }
}

#[async_trait]
impl AnalyticsSink for FailingAnalyticsSink {
    async fn track(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AnalyticsError::Rejected {
            status: 503,
            message: "collector unavailable".to_string(),
        })
    }
}
