//! Base types and utilities for the Autostop provider API clients.
//!
//! This crate provides common functionality shared across the API client crates:
//! - Configuration types for API clients
//! - Error handling types
//! - URL encoding utilities

mod configuration;
mod error;
mod util;

pub use configuration::Configuration;
pub use error::Error;
pub use util::urlencode;
