//! Application layer
//!
//! Contains the page services. Each service loads its data, derives the
//! view state a page renders, and reports interactions to analytics.

pub mod analytics;
pub mod bundle_service;
pub mod catalog_service;
pub mod journey_service;
pub mod loader;

pub use bundle_service::{BundleService, BundleView};
pub use catalog_service::{CatalogService, CatalogView};
pub use journey_service::{JourneyService, JourneyView};
pub use loader::LoadStatus;
