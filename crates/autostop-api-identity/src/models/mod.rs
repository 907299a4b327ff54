//! Request and response models for the provider auth endpoints.

mod auth_error_response;
mod identity_user;
mod provider_session;
mod signup_request;
mod signup_response;
mod token_password_request;

pub use auth_error_response::AuthErrorResponse;
pub use identity_user::IdentityUser;
pub use provider_session::ProviderSession;
pub use signup_request::{SignupMetadata, SignupRequest};
pub use signup_response::SignupResponse;
pub use token_password_request::TokenPasswordRequest;
