//! Domain entities
//!
//! Marketplace data loaded from static configuration, plus the small pieces
//! of view state (filters, compared bundles) the pages derive from it.

pub mod bundle;
pub mod engine;
pub mod filter;
pub mod journey;
pub mod product;
pub mod selection;

pub use bundle::{Bundle, BundleDocument, BundleId, MigrationRules};
pub use engine::EngineTag;
pub use filter::CatalogFilters;
pub use journey::{Journey, JourneyId, Milestone};
pub use product::{CatalogDocument, Product, ProductId};
pub use selection::{BundleSelection, COMPARE_CAPACITY};
