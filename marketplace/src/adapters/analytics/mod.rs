//! Analytics adapter
//!
//! Sinks for page interaction events.

pub mod client;

pub use client::{HttpAnalyticsSink, NoopAnalyticsSink, TracingAnalyticsSink};
