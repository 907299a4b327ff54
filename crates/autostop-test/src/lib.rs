//! Shared test helpers for the Autostop SDK crates.

mod api;

pub use api::{start_api_mock, start_provider_mock};
