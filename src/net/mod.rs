//! REST gateway, error taxonomy, and wire types for the HonkSpotter API.

pub mod api;
pub mod error;
pub mod types;
