//! Integration test utilities
//!
//! Helpers for running end-to-end tests against the REST API and a real
//! PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
