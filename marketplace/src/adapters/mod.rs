//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod analytics;
pub mod http_config;

pub use analytics::{HttpAnalyticsSink, NoopAnalyticsSink, TracingAnalyticsSink};
pub use http_config::HttpMarketplaceSource;
