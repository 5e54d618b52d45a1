//! Test utilities
//!
//! Manual mock implementations of the port traits and test fixtures.
//! The services hold their ports as trait objects, so the same mocks back
//! both the service unit tests and the router tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
