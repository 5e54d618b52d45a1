//! Analytics sink port trait
//!
//! Defines the interface the pages use to report user interactions. Every
//! event has a wire name and a flat JSON object of properties.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Events emitted by the marketplace pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "properties", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// Catalog filters applied (also emitted for the unfiltered first pass)
    CatalogFiltered {
        categoria: String,
        motor: String,
        peca: String,
        preco_max: f64,
        results_count: usize,
    },
    /// A bundle was toggled in the comparison buffer.
    /// `selected_bundles` is the buffer before the toggle.
    BundleCompared {
        bundle_id: String,
        selected_bundles: Vec<String>,
    },
    BundleSelected {
        bundle_id: String,
        bundle_name: String,
        value: f64,
    },
    BundleDemoRequested {
        bundle_id: String,
        bundle_name: String,
    },
    BundleMigration {
        from_bundle: String,
        to_bundle: String,
        reason: String,
    },
    ProductViewed {
        product_id: String,
        product_name: String,
        category: String,
        motor: String,
        peca: String,
    },
    CartAdded {
        product_id: String,
        product_name: String,
        value: f64,
        currency: String,
    },
    JourneyViewed {
        journey_id: String,
        journey_name: Option<String>,
    },
    MilestoneViewed {
        journey_id: String,
        milestone: String,
    },
    JourneyStartRequested {
        journey_id: String,
        journey_name: String,
    },
    JourneyDemoRequested {
        journey_id: String,
        journey_name: String,
    },
}

impl AnalyticsEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::CatalogFiltered { .. } => "catalog_filtered",
            AnalyticsEvent::BundleCompared { .. } => "bundle_compared",
            AnalyticsEvent::BundleSelected { .. } => "bundle_selected",
            AnalyticsEvent::BundleDemoRequested { .. } => "bundle_demo_requested",
            AnalyticsEvent::BundleMigration { .. } => "bundle_migration",
            AnalyticsEvent::ProductViewed { .. } => "product_viewed",
            AnalyticsEvent::CartAdded { .. } => "cart_added",
            AnalyticsEvent::JourneyViewed { .. } => "journey_viewed",
            AnalyticsEvent::MilestoneViewed { .. } => "milestone_viewed",
            AnalyticsEvent::JourneyStartRequested { .. } => "journey_start_requested",
            AnalyticsEvent::JourneyDemoRequested { .. } => "journey_demo_requested",
        }
    }

    /// Event properties as a JSON object
    pub fn properties(&self) -> serde_json::Value {
        serde_json::to_value(self)
            .ok()
            .and_then(|mut v| v.get_mut("properties").map(serde_json::Value::take))
            .unwrap_or_else(|| serde_json::Value::Object(Default::default()))
    }
}

/// Port trait for analytics delivery.
///
/// Callers treat delivery as fire-and-forget; see `app::analytics::emit`.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Deliver an analytics event
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}
