//! Bundle comparison handlers

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
    Form,
};
use serde::Deserialize;

use super::{interaction_response, page_response, ReturnForm};
use crate::domain::entities::{BundleId, BundleSelection};
use crate::error::AppError;
use crate::view::{render_bundles, Page};
use crate::AppState;

/// Query parameters for GET /bundles
#[derive(Debug, Default, Deserialize)]
pub struct BundleQuery {
    /// Comma-separated selection, in selection order
    pub selected: Option<String>,
    /// One bundle to toggle
    pub toggle: Option<String>,
}

/// Form body for POST /bundles/migrate
#[derive(Debug, Default, Deserialize)]
pub struct MigrateForm {
    pub from: Option<String>,
    pub to: Option<String>,
    pub return_to: Option<String>,
}

/// GET /bundles
pub async fn get_bundles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BundleQuery>,
) -> Response {
    let selected = query
        .selected
        .as_deref()
        .map(BundleSelection::parse_query_value);
    let toggle = query
        .toggle
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(BundleId::from);

    let view = state.bundle_service.compare(selected, toggle).await;
    page_response(&state, &headers, Page::Bundles, &view, render_bundles)
}

/// POST /bundles/:id/choose
pub async fn choose_bundle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    form: Option<Form<ReturnForm>>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let bundle = state.bundle_service.choose(&BundleId(id)).await?;

    Ok(interaction_response(
        &headers,
        form.return_to.as_deref(),
        Page::Bundles,
        "bundle_selected",
        serde_json::json!({ "bundle_id": bundle.id, "value": bundle.mrr }),
    ))
}

/// POST /bundles/:id/demo
pub async fn request_bundle_demo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    form: Option<Form<ReturnForm>>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let bundle = state.bundle_service.request_demo(&BundleId(id)).await?;

    Ok(interaction_response(
        &headers,
        form.return_to.as_deref(),
        Page::Bundles,
        "bundle_demo_requested",
        serde_json::json!({ "bundle_id": bundle.id }),
    ))
}

/// POST /bundles/migrate
///
/// Form: `from`, `to`. Reported only; no subscription changes.
pub async fn migrate_bundle(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Option<Form<MigrateForm>>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let from = required(form.from.as_deref(), "from")?;
    let to = required(form.to.as_deref(), "to")?;

    state.bundle_service.migrate(&from, &to).await?;

    Ok(interaction_response(
        &headers,
        form.return_to.as_deref(),
        Page::Bundles,
        "bundle_migration",
        serde_json::json!({ "from_bundle": from, "to_bundle": to }),
    ))
}

fn required(value: Option<&str>, field: &str) -> Result<BundleId, AppError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(BundleId::from)
        .ok_or_else(|| AppError::BadRequest(format!("Missing form field '{}'", field)))
}
