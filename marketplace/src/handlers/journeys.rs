//! Journey handlers

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
    Form,
};
use serde::Deserialize;

use super::{interaction_response, page_response, ReturnForm};
use crate::domain::entities::JourneyId;
use crate::error::AppError;
use crate::view::{render_journeys, Page};
use crate::AppState;

/// Query parameters for GET /jornadas
#[derive(Debug, Default, Deserialize)]
pub struct JourneyQuery {
    /// Journey on display
    pub journey: Option<String>,
    /// Journey picked from the list; overrides `journey`
    pub select: Option<String>,
}

/// Form body for POST /jornadas/:id/milestone
#[derive(Debug, Default, Deserialize)]
pub struct MilestoneForm {
    pub milestone: Option<String>,
    pub return_to: Option<String>,
}

/// GET /jornadas
pub async fn get_journeys(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<JourneyQuery>,
) -> Response {
    let view = match non_empty(query.select.as_deref()) {
        Some(picked) => state.journey_service.select(picked).await,
        None => {
            let shown = non_empty(query.journey.as_deref());
            state.journey_service.visualize(shown).await
        }
    };
    page_response(&state, &headers, Page::Journeys, &view, render_journeys)
}

fn non_empty(value: Option<&str>) -> Option<JourneyId> {
    value.filter(|id| !id.is_empty()).map(JourneyId::from)
}

/// POST /jornadas/:id/milestone
pub async fn view_milestone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    form: Option<Form<MilestoneForm>>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let milestone = form
        .milestone
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing form field 'milestone'".to_string()))?;

    let id = JourneyId(id);
    state.journey_service.view_milestone(&id, milestone)?;

    Ok(interaction_response(
        &headers,
        form.return_to.as_deref(),
        Page::Journeys,
        "milestone_viewed",
        serde_json::json!({ "journey_id": id, "milestone": milestone }),
    ))
}

/// POST /jornadas/:id/start
pub async fn start_journey(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    form: Option<Form<ReturnForm>>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let journey = state.journey_service.request_start(&JourneyId(id))?;

    Ok(interaction_response(
        &headers,
        form.return_to.as_deref(),
        Page::Journeys,
        "journey_start_requested",
        serde_json::json!({ "journey_id": journey.id }),
    ))
}

/// POST /jornadas/:id/demo
pub async fn request_journey_demo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    form: Option<Form<ReturnForm>>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let journey = state.journey_service.request_demo(&JourneyId(id))?;

    Ok(interaction_response(
        &headers,
        form.return_to.as_deref(),
        Page::Journeys,
        "journey_demo_requested",
        serde_json::json!({ "journey_id": journey.id }),
    ))
}
