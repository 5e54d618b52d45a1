//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Marketplace data and derived view state
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
