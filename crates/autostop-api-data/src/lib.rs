//! Hand-written client for the provider's row API.
//!
//! The SDK owns a single table, `profiles`, keyed by the provider account
//! id. Two operations are consumed: insert-row at registration and
//! select-row (projecting username + avatar) on every login/session check.

pub mod apis;
pub mod models;
