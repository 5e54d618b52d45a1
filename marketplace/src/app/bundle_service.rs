//! Bundle comparison service
//!
//! Loads the bundle list, maintains the two-slot comparison buffer and
//! reports bundle actions. Migration between bundles is reported only; it
//! changes no state.

use std::sync::Arc;

use serde::Serialize;

use crate::app::analytics::emit;
use crate::app::loader::{LoadState, LoadStatus};
use crate::domain::entities::{
    Bundle, BundleDocument, BundleId, BundleSelection, MigrationRules, COMPARE_CAPACITY,
};
use crate::domain::ports::{AnalyticsEvent, AnalyticsSink, MarketplaceSource};
use crate::error::AppError;

/// Everything the bundle comparison page renders
#[derive(Debug, Clone, Serialize)]
pub struct BundleView {
    pub status: LoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub bundles: Vec<Bundle>,
    /// Selected ids in selection order
    pub selection: BundleSelection,
    /// Selected bundles in list order
    pub compared: Vec<Bundle>,
    #[serde(rename = "migrationRules")]
    pub migration_rules: Option<MigrationRules>,
}

impl BundleView {
    /// The comparison and migration panels render only for a full pair
    pub fn is_comparing(&self) -> bool {
        self.selection.is_comparable() && self.compared.len() == COMPARE_CAPACITY
    }

    pub fn is_selected(&self, id: &BundleId) -> bool {
        self.selection.contains(id)
    }
}

/// Service behind the bundle comparison page
pub struct BundleService {
    source: Arc<dyn MarketplaceSource>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl BundleService {
    pub fn new(source: Arc<dyn MarketplaceSource>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self { source, analytics }
    }

    /// Load the bundle document. A failed load yields no bundles.
    pub async fn load_bundles(&self) -> LoadState<BundleDocument> {
        LoadState::from_result("bundles", self.source.fetch_bundles().await)
    }

    /// Render state for the comparison page.
    ///
    /// `selected` restores the buffer carried by the page; without it the
    /// first two bundles are compared. `toggle` applies one selection step
    /// and emits `bundle_compared` with the buffer as it was before.
    pub async fn compare(
        &self,
        selected: Option<BundleSelection>,
        toggle: Option<BundleId>,
    ) -> BundleView {
        let state = self.load_bundles().await;
        let status = state.status();
        let error = state.failure().map(String::from);
        let document = state.unwrap_or_default();

        let mut selection = selected.unwrap_or_else(|| default_selection(&document.bundles));

        if let Some(id) = toggle {
            if document.bundles.iter().any(|b| b.id == id) {
                emit(
                    &self.analytics,
                    AnalyticsEvent::BundleCompared {
                        bundle_id: id.to_string(),
                        selected_bundles: selection.ids().iter().map(|b| b.to_string()).collect(),
                    },
                );
                selection.toggle(id);
            } else {
                tracing::debug!("ignoring toggle of unknown bundle {}", id);
            }
        }

        let compared = document
            .bundles
            .iter()
            .filter(|b| selection.contains(&b.id))
            .cloned()
            .collect();

        BundleView {
            status,
            error,
            bundles: document.bundles,
            selection,
            compared,
            migration_rules: document.migration_rules,
        }
    }

    async fn find_bundle(&self, id: &BundleId) -> Result<Bundle, AppError> {
        self.load_bundles()
            .await
            .unwrap_or_default()
            .bundles
            .into_iter()
            .find(|b| &b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Bundle {} not found", id)))
    }

    /// "escolher {bundle}"
    pub async fn choose(&self, id: &BundleId) -> Result<Bundle, AppError> {
        let bundle = self.find_bundle(id).await?;
        emit(
            &self.analytics,
            AnalyticsEvent::BundleSelected {
                bundle_id: bundle.id.to_string(),
                bundle_name: bundle.name.clone(),
                value: bundle.mrr,
            },
        );
        Ok(bundle)
    }

    /// "agendar demo" on a bundle
    pub async fn request_demo(&self, id: &BundleId) -> Result<Bundle, AppError> {
        let bundle = self.find_bundle(id).await?;
        emit(
            &self.analytics,
            AnalyticsEvent::BundleDemoRequested {
                bundle_id: bundle.id.to_string(),
                bundle_name: bundle.name.clone(),
            },
        );
        Ok(bundle)
    }

    /// Migration between two compared bundles. Reported only.
    pub async fn migrate(&self, from: &BundleId, to: &BundleId) -> Result<(), AppError> {
        if from == to {
            return Err(AppError::BadRequest(
                "Migration needs two different bundles".to_string(),
            ));
        }

        let bundles = self.load_bundles().await.unwrap_or_default().bundles;
        for id in [from, to] {
            if !bundles.iter().any(|b| &b.id == id) {
                return Err(AppError::NotFound(format!("Bundle {} not found", id)));
            }
        }

        emit(
            &self.analytics,
            AnalyticsEvent::BundleMigration {
                from_bundle: from.to_string(),
                to_bundle: to.to_string(),
                reason: "comparison_page".to_string(),
            },
        );

        tracing::info!("migração: {} → {}", from, to);
        Ok(())
    }
}

/// First two bundles of the list, or nothing when there are fewer
fn default_selection(bundles: &[Bundle]) -> BundleSelection {
    if bundles.len() < COMPARE_CAPACITY {
        return BundleSelection::new();
    }
    BundleSelection::from_ids(bundles.iter().take(COMPARE_CAPACITY).map(|b| b.id.clone()))
}
