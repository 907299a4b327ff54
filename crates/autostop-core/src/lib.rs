#![doc = include_str!("../README.md")]

pub mod client;
mod error;
mod ids;
pub mod session;

pub use client::{Client, ClientSettings};
pub use error::{ApiError, MissingFieldError, NotAuthenticatedError};
pub use ids::UserId;
pub use session::{AuthStateEvent, CurrentUser, InvalidUsernameError, SessionState};
