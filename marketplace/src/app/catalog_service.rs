//! Catalog service
//!
//! Loads the product catalog, derives the filter option sets and the
//! visible product list, and reports product interactions.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::app::analytics::emit;
use crate::app::loader::{LoadState, LoadStatus};
use crate::domain::entities::{CatalogFilters, Product, ProductId};
use crate::domain::ports::{AnalyticsEvent, AnalyticsSink, MarketplaceSource};
use crate::error::AppError;

/// Distinct values offered by the filter selectors, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    #[serde(rename = "categorias")]
    pub categories: Vec<String>,
    #[serde(rename = "motores")]
    pub engines: Vec<String>,
    #[serde(rename = "pecas")]
    pub modules: Vec<String>,
}

impl FilterOptions {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            categories: distinct(products.iter().map(|p| p.category.as_str())),
            engines: distinct(products.iter().map(|p| p.engine.as_str())),
            modules: distinct(products.iter().map(|p| p.module.as_str())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(String::from)
        .collect()
}

/// Everything the catalog page renders
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub status: LoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of loaded products, before filtering
    pub total: usize,
    pub filters: CatalogFilters,
    pub options: FilterOptions,
    /// Visible products, in catalog order
    pub products: Vec<Product>,
}

impl CatalogView {
    fn new(state: &LoadState<Vec<Product>>, filters: CatalogFilters) -> Self {
        let all = state.items();
        let products: Vec<Product> = filters.apply(all).into_iter().cloned().collect();
        Self {
            status: state.status(),
            error: state.failure().map(String::from),
            total: all.len(),
            options: FilterOptions::from_products(all),
            filters,
            products,
        }
    }

    pub fn results_count(&self) -> usize {
        self.products.len()
    }
}

/// Service behind the catalog page
pub struct CatalogService {
    source: Arc<dyn MarketplaceSource>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn MarketplaceSource>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self { source, analytics }
    }

    /// Load the catalog. A failed load yields an empty list.
    pub async fn load_products(&self) -> LoadState<Vec<Product>> {
        let result = self.source.fetch_catalog().await.map(|doc| doc.products);
        LoadState::from_result("catálogo", result)
    }

    /// Render state for the catalog page without reporting it
    pub async fn revisit(&self, filters: CatalogFilters) -> CatalogView {
        let state = self.load_products().await;
        CatalogView::new(&state, filters)
    }

    /// Render state for the catalog page.
    ///
    /// Emits `catalog_filtered`, including for the unfiltered first pass.
    pub async fn browse(&self, filters: CatalogFilters) -> CatalogView {
        let view = self.revisit(filters).await;

        tracing::debug!(
            total = view.total,
            visible = view.results_count(),
            unfiltered = view.filters.is_empty(),
            "catalog filtered"
        );

        emit(
            &self.analytics,
            AnalyticsEvent::CatalogFiltered {
                categoria: view.filters.category.clone().unwrap_or_default(),
                motor: view.filters.engine.clone().unwrap_or_default(),
                peca: view.filters.module.clone().unwrap_or_default(),
                preco_max: view.filters.max_price.unwrap_or(0.0),
                results_count: view.results_count(),
            },
        );

        view
    }

    async fn find_product(&self, id: &ProductId) -> Result<Product, AppError> {
        self.load_products()
            .await
            .items()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    /// "ver detalhes" on a product card
    pub async fn view_product(&self, id: &ProductId) -> Result<Product, AppError> {
        let product = self.find_product(id).await?;

        emit(
            &self.analytics,
            AnalyticsEvent::ProductViewed {
                product_id: product.id.to_string(),
                product_name: product.name.clone(),
                category: product.category.clone(),
                motor: product.engine.clone(),
                peca: product.module.clone(),
            },
        );

        tracing::info!("visualizando produto: {}", product.id);
        Ok(product)
    }

    /// "adicionar" on a product card
    pub async fn add_to_cart(&self, id: &ProductId) -> Result<Product, AppError> {
        let product = self.find_product(id).await?;

        emit(
            &self.analytics,
            AnalyticsEvent::CartAdded {
                product_id: product.id.to_string(),
                product_name: product.name.clone(),
                value: product.price.cart_value(),
                currency: "BRL".to_string(),
            },
        );

        tracing::info!("adicionando ao carrinho: {}", product.id);
        Ok(product)
    }
}
