#![doc = include_str!("../README.md")]

mod check_session;
mod listener;
mod login;
mod logout;
mod profile;
mod register;
mod session_client;

pub use autostop_api_identity::models::{IdentityUser, ProviderSession};
pub use check_session::CheckSessionError;
pub use login::{LoginError, LoginRequest};
pub use logout::LogoutError;
pub use register::{RegisterError, RegisterRequest, RegisterResponse};
pub use session_client::{SessionClient, SessionClientExt};
