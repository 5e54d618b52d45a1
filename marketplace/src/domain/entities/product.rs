//! Product domain entity
//!
//! A single modular product of the marketplace catalog, as loaded from
//! `catalog.json`. Products are immutable once loaded.

use serde::{Deserialize, Serialize};

/// Unique identifier for a product (e.g. `recorrente.sofia_ia_sdr`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price of a product. Either component may be zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Monthly recurring component
    #[serde(default)]
    pub mrr: f64,
    /// One-time setup component
    #[serde(default)]
    pub setup: f64,
}

impl Price {
    /// Neither component is set ("sob consulta")
    pub fn is_on_request(&self) -> bool {
        self.mrr == 0.0 && self.setup == 0.0
    }

    /// Value reported when the product is added to the cart
    pub fn cart_value(&self) -> f64 {
        if self.mrr != 0.0 {
            self.mrr
        } else {
            self.setup
        }
    }
}

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    /// Business engine tag ("motor")
    #[serde(rename = "motor")]
    pub engine: String,
    /// Module tag within the engine ("peça")
    #[serde(rename = "peca")]
    pub module: String,
    #[serde(rename = "preco", default)]
    pub price: Price,
    #[serde(rename = "duracao", default)]
    pub duration: String,
    #[serde(default)]
    pub ctas: Vec<String>,
    #[serde(rename = "trackingEvents", default)]
    pub tracking_events: Vec<String>,
}

/// Shape of `catalog.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub products: Vec<Product>,
}
