//! Analytics sink implementations
//!
//! `NoopAnalyticsSink` is the default. `TracingAnalyticsSink` writes events
//! to the log and `HttpAnalyticsSink` posts them to a collector.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::ports::{AnalyticsEvent, AnalyticsSink};
use crate::error::AnalyticsError;

/// A no-op sink, used when no analytics backend is configured
pub struct NoopAnalyticsSink;

#[async_trait]
impl AnalyticsSink for NoopAnalyticsSink {
    async fn track(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        Ok(())
    }
}

/// Logs each event at info level under the `analytics` target
pub struct TracingAnalyticsSink;

#[async_trait]
impl AnalyticsSink for TracingAnalyticsSink {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        tracing::info!(
            target: "analytics",
            event = event.name(),
            properties = %event.properties(),
            "analytics event"
        );
        Ok(())
    }
}

/// Body posted to the collector
#[derive(Debug, Serialize)]
struct EventEnvelope {
    id: Uuid,
    name: &'static str,
    properties: serde_json::Value,
    timestamp: DateTime<Utc>,
}

impl EventEnvelope {
    fn new(event: &AnalyticsEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: event.name(),
            properties: event.properties(),
            timestamp: Utc::now(),
        }
    }
}

/// Posts events as JSON to an HTTP collector.
///
/// Each delivery runs on its own task, so every request is bounded by
/// `timeout`.
pub struct HttpAnalyticsSink {
    http: Client,
    endpoint: String,
}

impl HttpAnalyticsSink {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, AnalyticsError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl AnalyticsSink for HttpAnalyticsSink {
    async fn track(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        let envelope = EventEnvelope::new(&event);
        let resp = self.http.post(&self.endpoint).json(&envelope).send().await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            Err(AnalyticsError::Rejected { status, message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> AnalyticsEvent {
        AnalyticsEvent::CartAdded {
            product_id: "recorrente.sofia_ia_sdr".to_string(),
            product_name: "sofia ia sdr".to_string(),
            value: 2500.0,
            currency: "BRL".to_string(),
        }
    }

    #[tokio::test]
    async fn noop_sink_accepts_everything() {
        assert!(NoopAnalyticsSink.track(sample_event()).await.is_ok());
    }

    #[tokio::test]
    async fn tracing_sink_accepts_everything() {
        assert!(TracingAnalyticsSink.track(sample_event()).await.is_ok());
    }

    #[test]
    fn envelope_carries_name_and_properties() {
        let envelope = EventEnvelope::new(&sample_event());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["name"], "cart_added");
        assert_eq!(json["properties"]["currency"], "BRL");
        assert!(json["id"].is_string());
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn http_sink_reports_unreachable_collector() {
        let sink =
            HttpAnalyticsSink::new("http://127.0.0.1:9/events".to_string(), Duration::from_secs(5))
                .unwrap();
        let result = sink.track(sample_event()).await;
        assert!(matches!(result, Err(AnalyticsError::Request(_))));
    }

    #[tokio::test]
    async fn http_sink_gives_up_on_a_silent_collector() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // accept and never answer
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let sink = HttpAnalyticsSink::new(
            format!("http://{}/events", addr),
            Duration::from_millis(200),
        )
        .unwrap();
        let result = sink.track(sample_event()).await;

        assert!(matches!(result, Err(AnalyticsError::Request(e)) if e.is_timeout()));
    }
}
