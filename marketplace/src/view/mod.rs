//! Server-side page rendering
//!
//! Each page renders its body from the view state its service derives.
//! `layout` wraps the body in the shared document shell.

pub mod bundles;
pub mod catalog;
pub mod format;
pub mod journeys;
pub mod layout;
pub mod product_card;

pub use bundles::render_bundles;
pub use catalog::render_catalog;
pub use journeys::render_journeys;
pub use layout::{Page, Shell};
