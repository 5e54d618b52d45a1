//! Bundle domain entity
//!
//! A fixed-price package of products, plus the migration rules published
//! alongside the bundles in `bundles.json`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a bundle (e.g. `bundle.starter`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BundleId(pub String);

impl BundleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BundleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for BundleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bundle of products sold together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: BundleId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mrr: f64,
    #[serde(default)]
    pub setup: f64,
    /// Constituent product ids. Not checked against the catalog.
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub savings: f64,
    /// Suggested next tier. Not checked against the bundle list.
    #[serde(rename = "upgradePath", default)]
    pub upgrade_path: Option<String>,
}

impl Bundle {
    /// Product labels as displayed: the first `recorrente.` prefix dropped
    pub fn product_labels(&self) -> impl Iterator<Item = String> + '_ {
        self.products
            .iter()
            .map(|id| id.replacen("recorrente.", "", 1))
    }

    /// Upgrade target as displayed: the first `bundle.` prefix dropped
    pub fn upgrade_label(&self) -> Option<String> {
        self.upgrade_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| path.replacen("bundle.", "", 1))
    }
}

/// A single migration rule. Display-only, never evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationRule {
    pub trigger: String,
    pub discount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationRules {
    pub a_la_carte_to_bundle: MigrationRule,
    pub bundle_upgrade: MigrationRule,
}

/// Shape of `bundles.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleDocument {
    pub bundles: Vec<Bundle>,
    #[serde(rename = "migrationRules", default)]
    pub migration_rules: Option<MigrationRules>,
}
