//! Shared fixtures for integration tests.

pub mod model_fixtures;
pub mod node_samples;
