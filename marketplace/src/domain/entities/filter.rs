//! Catalog filters
//!
//! Four independent optional predicates combined with logical AND.

use serde::{Deserialize, Deserializer, Serialize};

use super::product::Product;

/// Filter state of the catalog page.
///
/// Deserializes from the catalog query string (`categoria`, `motor`,
/// `peca`, `precoMax`); empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilters {
    #[serde(rename = "categoria", default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    #[serde(rename = "motor", default, deserialize_with = "blank_as_none")]
    pub engine: Option<String>,
    #[serde(rename = "peca", default, deserialize_with = "blank_as_none")]
    pub module: Option<String>,
    #[serde(rename = "precoMax", default, deserialize_with = "blank_as_none_f64")]
    pub max_price: Option<f64>,
}

impl CatalogFilters {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.engine.is_none()
            && self.module.is_none()
            && self.effective_max_price().is_none()
    }

    /// Max price only counts when strictly positive
    pub fn effective_max_price(&self) -> Option<f64> {
        self.max_price.filter(|max| *max > 0.0)
    }

    /// Whether a product passes every active predicate.
    ///
    /// The price predicate accepts a product if either its monthly or its
    /// setup component is positive and within the maximum. The two
    /// components are not summed.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(engine) = &self.engine {
            if &product.engine != engine {
                return false;
            }
        }
        if let Some(module) = &self.module {
            if &product.module != module {
                return false;
            }
        }
        if let Some(max) = self.effective_max_price() {
            let price = &product.price;
            let mrr_fits = price.mrr > 0.0 && price.mrr <= max;
            let setup_fits = price.setup > 0.0 && price.setup <= max;
            if !(mrr_fits || setup_fits) {
                return false;
            }
        }
        true
    }

    /// Visible products, in catalog order
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

fn blank_as_none_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid precoMax: {}", raw))),
    }
}
