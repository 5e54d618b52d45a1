//! HTTP config adapter
//!
//! Marketplace source backed by the static `/configs` documents.

pub mod client;

pub use client::HttpMarketplaceSource;
