//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod analytics;
pub mod config_source;

pub use analytics::{AnalyticsEvent, AnalyticsSink};
pub use config_source::MarketplaceSource;
