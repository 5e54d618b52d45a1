//! HTTP handlers
//!
//! Page handlers render HTML, or the page's view model as JSON when the
//! client sends `Accept: application/json`. Interaction handlers report one
//! analytics event and send the visitor back to the page they came from.

pub mod bundles;
pub mod catalog;
pub mod journeys;

pub use bundles::{choose_bundle, get_bundles, migrate_bundle, request_bundle_demo};
pub use catalog::{add_to_cart, get_catalog, view_product};
pub use journeys::{get_journeys, request_journey_demo, start_journey, view_milestone};

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::view::Page;
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Respond with the view model as JSON or the rendered page as HTML
fn page_response<T, F>(
    state: &AppState,
    headers: &HeaderMap,
    page: Page,
    view: &T,
    render: F,
) -> Response
where
    T: Serialize,
    F: FnOnce(&T, bool) -> String,
{
    if wants_json(headers) {
        Json(view).into_response()
    } else {
        let body = render(view, state.config.surface_load_errors);
        Html(state.shell.render(page, &body)).into_response()
    }
}

/// Form body shared by the single-button interaction forms.
///
/// Handlers take it as `Option<Form<_>>` so API clients may post an
/// empty body.
#[derive(Debug, Default, Deserialize)]
pub struct ReturnForm {
    pub return_to: Option<String>,
}

/// JSON response for interactions
#[derive(Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Local redirect target, or `fallback` when `requested` is missing or
/// could leave the site.
pub fn safe_return_to(requested: Option<&str>, fallback: &str) -> String {
    match requested {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => fallback.to_string(),
    }
}

/// Finish an interaction: `202` with a JSON ack for API clients, otherwise
/// a `303` back to the page.
fn interaction_response(
    headers: &HeaderMap,
    return_to: Option<&str>,
    fallback: Page,
    event: &'static str,
    data: serde_json::Value,
) -> Response {
    if wants_json(headers) {
        (
            StatusCode::ACCEPTED,
            Json(ActionResponse {
                success: true,
                event,
                data: Some(data),
            }),
        )
            .into_response()
    } else {
        Redirect::to(&safe_return_to(return_to, fallback.href())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn wants_json_from_accept_header() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
        assert!(!wants_json(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain"),
        );
        assert!(wants_json(&headers));
    }

    #[test]
    fn return_to_must_stay_local() {
        assert_eq!(safe_return_to(Some("/bundles?selected=a"), "/"), "/bundles?selected=a");
        assert_eq!(safe_return_to(None, "/jornadas"), "/jornadas");
        assert_eq!(safe_return_to(Some("//evil.example"), "/"), "/");
        assert_eq!(safe_return_to(Some("https://evil.example"), "/"), "/");
        assert_eq!(safe_return_to(Some("/\\evil.example"), "/"), "/");
        assert_eq!(safe_return_to(Some(""), "/bundles"), "/bundles");
    }
}
