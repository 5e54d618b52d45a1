//! Journey service
//!
//! Journeys are compiled into the binary. The page load still goes through
//! a short simulated delay before the list is available.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::app::analytics::emit;
use crate::app::loader::{LoadState, LoadStatus};
use crate::domain::entities::{Journey, JourneyId};
use crate::domain::ports::{AnalyticsEvent, AnalyticsSink};
use crate::error::{AppError, ConfigError};

const EMBEDDED_JOURNEYS: &str = include_str!("journeys.json");

/// Parse the embedded journey definitions
pub fn embedded_journeys() -> Result<Vec<Journey>, ConfigError> {
    serde_json::from_str(EMBEDDED_JOURNEYS).map_err(|e| ConfigError::Embedded(e.to_string()))
}

/// Everything the journeys page renders
#[derive(Debug, Clone, Serialize)]
pub struct JourneyView {
    pub status: LoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub journeys: Vec<Journey>,
    pub selected: Option<JourneyId>,
    /// Detail of the selected journey; absent for an unknown id
    pub current: Option<Journey>,
}

/// Service behind the journeys page
pub struct JourneyService {
    analytics: Arc<dyn AnalyticsSink>,
    load_delay: Duration,
}

impl JourneyService {
    pub fn new(analytics: Arc<dyn AnalyticsSink>, load_delay: Duration) -> Self {
        Self {
            analytics,
            load_delay,
        }
    }

    /// Load the journey list after the simulated delay
    pub async fn load_journeys(&self) -> LoadState<Vec<Journey>> {
        if !self.load_delay.is_zero() {
            tokio::time::sleep(self.load_delay).await;
        }
        LoadState::from_result("jornadas", embedded_journeys())
    }

    /// Render state for the journeys page.
    ///
    /// Shows `shown`, or the first journey when absent. Reports nothing:
    /// this is also the page a milestone or CTA redirects back to.
    pub async fn visualize(&self, shown: Option<JourneyId>) -> JourneyView {
        let state = self.load_journeys().await;
        let status = state.status();
        let error = state.failure().map(String::from);
        let journeys = state.unwrap_or_default();

        let selected = shown.or_else(|| journeys.first().map(|j| j.id.clone()));
        let current = selected
            .as_ref()
            .and_then(|id| journeys.iter().find(|j| &j.id == id))
            .cloned();

        JourneyView {
            status,
            error,
            journeys,
            selected,
            current,
        }
    }

    /// A journey picked from the list: render it and emit `journey_viewed`,
    /// even for an id that does not exist.
    pub async fn select(&self, id: JourneyId) -> JourneyView {
        let view = self.visualize(Some(id.clone())).await;
        emit(
            &self.analytics,
            AnalyticsEvent::JourneyViewed {
                journey_id: id.to_string(),
                journey_name: view.current.as_ref().map(|j| j.name.clone()),
            },
        );
        view
    }

    fn find_journey(&self, id: &JourneyId) -> Result<Journey, AppError> {
        embedded_journeys()
            .map_err(|e| AppError::Internal(e.to_string()))?
            .into_iter()
            .find(|j| &j.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Journey {} not found", id)))
    }

    /// A milestone was clicked on the timeline. Reported only.
    pub fn view_milestone(&self, id: &JourneyId, milestone: &str) -> Result<(), AppError> {
        let journey = self.find_journey(id)?;
        if journey.find_milestone(milestone).is_none() {
            return Err(AppError::NotFound(format!(
                "Milestone '{}' not found in journey {}",
                milestone, id
            )));
        }

        emit(
            &self.analytics,
            AnalyticsEvent::MilestoneViewed {
                journey_id: journey.id.to_string(),
                milestone: milestone.to_string(),
            },
        );
        Ok(())
    }

    /// "começar jornada"
    pub fn request_start(&self, id: &JourneyId) -> Result<Journey, AppError> {
        let journey = self.find_journey(id)?;
        emit(
            &self.analytics,
            AnalyticsEvent::JourneyStartRequested {
                journey_id: journey.id.to_string(),
                journey_name: journey.name.clone(),
            },
        );
        Ok(journey)
    }

    /// "agendar demo" on a journey
    pub fn request_demo(&self, id: &JourneyId) -> Result<Journey, AppError> {
        let journey = self.find_journey(id)?;
        emit(
            &self.analytics,
            AnalyticsEvent::JourneyDemoRequested {
                journey_id: journey.id.to_string(),
                journey_name: journey.name.clone(),
            },
        );
        Ok(journey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingAnalyticsSink;

    fn service() -> (JourneyService, Arc<RecordingAnalyticsSink>) {
        let recorder = Arc::new(RecordingAnalyticsSink::new());
        (
            JourneyService::new(recorder.clone(), Duration::ZERO),
            recorder,
        )
    }

    #[test]
    fn embedded_journeys_parse() {
        let journeys = embedded_journeys().unwrap();
        let ids: Vec<&str> = journeys.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["startup_series_a", "scaleup_series_b", "enterprise"]);
        assert!(journeys.iter().all(|j| !j.timeline.is_empty()));
    }

    #[tokio::test]
    async fn defaults_to_first_journey_without_event() {
        let (service, recorder) = service();

        let view = service.visualize(None).await;

        assert_eq!(view.status, LoadStatus::Ready);
        assert_eq!(view.selected, Some(view.journeys[0].id.clone()));
        assert_eq!(view.current.as_ref(), Some(&view.journeys[0]));
        assert!(recorder.events_after_flush(0).await.is_empty());
    }

    #[tokio::test]
    async fn showing_a_journey_is_not_a_selection() {
        let (service, recorder) = service();

        let view = service.visualize(Some(JourneyId::from("enterprise"))).await;

        assert_eq!(view.current.unwrap().id, JourneyId::from("enterprise"));
        assert!(recorder.events_after_flush(0).await.is_empty());
    }

    #[tokio::test]
    async fn timeline_keeps_source_order() {
        let (service, _) = service();

        let view = service.visualize(None).await;

        let weeks: Vec<u32> = view
            .current
            .unwrap()
            .timeline
            .iter()
            .map(|m| m.week)
            .collect();
        assert_eq!(weeks, vec![1, 2, 4, 8, 12]);
    }

    #[tokio::test]
    async fn explicit_selection_emits_journey_viewed() {
        let (service, recorder) = service();

        let view = service.select(JourneyId::from("enterprise")).await;

        assert_eq!(view.current.unwrap().id, JourneyId::from("enterprise"));
        let events = recorder.events_after_flush(1).await;
        assert_eq!(events[0].name(), "journey_viewed");
        assert_eq!(events[0].properties()["journey_name"], "enterprise (R$ 50M+)");
    }

    #[tokio::test]
    async fn unknown_selection_has_no_detail() {
        let (service, recorder) = service();

        let view = service.select(JourneyId::from("ghost")).await;

        assert_eq!(view.selected, Some(JourneyId::from("ghost")));
        assert!(view.current.is_none());
        assert_eq!(view.journeys.len(), 3);
        let events = recorder.events_after_flush(1).await;
        assert!(events[0].properties()["journey_name"].is_null());
    }

    #[tokio::test]
    async fn load_waits_for_the_simulated_delay() {
        let service = JourneyService::new(
            Arc::new(RecordingAnalyticsSink::new()),
            Duration::from_millis(20),
        );

        let started = std::time::Instant::now();
        let state = service.load_journeys().await;

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(state.items().len(), 3);
    }

    #[tokio::test]
    async fn milestone_click_is_reported() {
        let (service, recorder) = service();

        service
            .view_milestone(&JourneyId::from("startup_series_a"), "setup sofia")
            .unwrap();

        let events = recorder.events_after_flush(1).await;
        assert_eq!(
            events[0],
            AnalyticsEvent::MilestoneViewed {
                journey_id: "startup_series_a".to_string(),
                milestone: "setup sofia".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unknown_milestone_is_not_found() {
        let (service, _) = service();
        let result = service.view_milestone(&JourneyId::from("enterprise"), "setup sofia");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn start_and_demo_requests() {
        let (service, recorder) = service();
        let id = JourneyId::from("scaleup_series_b");

        service.request_start(&id).unwrap();
        service.request_demo(&id).unwrap();

        let names: Vec<&str> = recorder
            .events_after_flush(2)
            .await
            .iter()
            .map(|e| e.name())
            .collect();
        assert_eq!(names, vec!["journey_start_requested", "journey_demo_requested"]);
    }
}
