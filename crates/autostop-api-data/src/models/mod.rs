//! Models for the profile table.

mod profile;

pub use profile::{ProfileRecord, ProfileRow};
