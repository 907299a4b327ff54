//! Hand-written client for the hosted provider's auth endpoints.
//!
//! Covers the five auth exchanges the SDK consumes: account creation,
//! password sign-in, sign-out, and current-user lookup. The wire format is
//! owned by the provider; this crate only constrains the shapes the SDK
//! sends and reads.

pub mod apis;
pub mod models;
