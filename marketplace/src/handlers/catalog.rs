//! Catalog handlers
//!
//! The catalog page and the product card interactions.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
    Form,
};
use serde::Deserialize;

use super::{interaction_response, page_response, ReturnForm};
use crate::domain::entities::{CatalogFilters, ProductId};
use crate::error::AppError;
use crate::view::{render_catalog, Page};
use crate::AppState;

/// Set on the page a product interaction redirects back to
#[derive(Debug, Default, Deserialize)]
pub struct ReturnQuery {
    pub back: Option<String>,
}

/// GET /
///
/// Query: `categoria`, `motor`, `peca`, `precoMax`. Blank values are unset.
/// `back` marks a return from a product card, which is not a filter change.
pub async fn get_catalog(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filters): Query<CatalogFilters>,
    Query(returning): Query<ReturnQuery>,
) -> Response {
    let view = if returning.back.is_some() {
        state.catalog_service.revisit(filters).await
    } else {
        state.catalog_service.browse(filters).await
    };
    page_response(&state, &headers, Page::Catalog, &view, render_catalog)
}

/// POST /products/:id/view
pub async fn view_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    form: Option<Form<ReturnForm>>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let product = state
        .catalog_service
        .view_product(&ProductId(id))
        .await?;

    Ok(interaction_response(
        &headers,
        form.return_to.as_deref(),
        Page::Catalog,
        "product_viewed",
        serde_json::json!({ "product_id": product.id }),
    ))
}

/// POST /products/:id/cart
pub async fn add_to_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    form: Option<Form<ReturnForm>>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let product = state.catalog_service.add_to_cart(&ProductId(id)).await?;

    Ok(interaction_response(
        &headers,
        form.return_to.as_deref(),
        Page::Catalog,
        "cart_added",
        serde_json::json!({
            "product_id": product.id,
            "value": product.price.cart_value(),
        }),
    ))
}
