//! Fire-and-forget analytics emission

use std::sync::Arc;

use crate::domain::ports::{AnalyticsEvent, AnalyticsSink};

/// Hand an event to the sink without waiting for delivery.
///
/// Delivery runs on its own task; a failure is logged and otherwise
/// ignored. Must be called from within the tokio runtime.
pub fn emit(sink: &Arc<dyn AnalyticsSink>, event: AnalyticsEvent) {
    let sink = Arc::clone(sink);
    tokio::spawn(async move {
        let name = event.name();
        if let Err(e) = sink.track(event).await {
            tracing::warn!("analytics event {} dropped: {}", name, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FailingAnalyticsSink, RecordingAnalyticsSink};

    #[tokio::test]
    async fn emit_delivers_to_sink() {
        let recorder = Arc::new(RecordingAnalyticsSink::new());
        let sink: Arc<dyn AnalyticsSink> = recorder.clone();

        emit(
            &sink,
            AnalyticsEvent::MilestoneViewed {
                journey_id: "enterprise".to_string(),
                milestone: "diagnóstico".to_string(),
            },
        );

        let names = recorder.names_after_flush(1).await;
        assert_eq!(names, vec!["milestone_viewed"]);
    }

    #[tokio::test]
    async fn emit_swallows_sink_failures() {
        let failing = Arc::new(FailingAnalyticsSink::new());
        let sink: Arc<dyn AnalyticsSink> = failing.clone();

        emit(
            &sink,
            AnalyticsEvent::JourneyDemoRequested {
                journey_id: "enterprise".to_string(),
                journey_name: "enterprise (R$ 50M+)".to_string(),
            },
        );
        assert_eq!(failing.calls_after_flush(1).await, 1);

        // the runtime keeps delivering after a rejected event
        let recorder = Arc::new(RecordingAnalyticsSink::new());
        let sink: Arc<dyn AnalyticsSink> = recorder.clone();
        emit(
            &sink,
            AnalyticsEvent::JourneyStartRequested {
                journey_id: "enterprise".to_string(),
                journey_name: "enterprise (R$ 50M+)".to_string(),
            },
        );
        let names = recorder.names_after_flush(1).await;
        assert_eq!(names, vec!["journey_start_requested"]);
    }
}
