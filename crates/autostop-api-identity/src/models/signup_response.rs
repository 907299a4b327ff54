use serde::{Deserialize, Serialize};

use super::{IdentityUser, ProviderSession};

/// Response of `POST /signup`.
///
/// The provider returns one of two shapes: when the instance auto-confirms
/// accounts it issues a full session (token fields plus a nested `user`),
/// otherwise it returns the bare user object at the top level. Both are
/// accepted here.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SignupResponse {
    /// Account identifier, present when the bare user object was returned.
    #[serde(default)]
    pub id: Option<uuid::Uuid>,
    /// Account address, present when the bare user object was returned.
    #[serde(default)]
    pub email: Option<String>,

    /// Session token, present when the account was auto-confirmed.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    #[allow(missing_docs)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    #[allow(missing_docs)]
    pub expires_in: Option<i64>,
    /// Nested user object, present alongside the session token.
    #[serde(default)]
    pub user: Option<IdentityUser>,
}

impl SignupResponse {
    /// The identity of the newly created account, regardless of which
    /// response shape the provider chose.
    pub fn identity(&self) -> Option<IdentityUser> {
        if let Some(user) = &self.user {
            return Some(user.clone());
        }
        match (self.id, &self.email) {
            (Some(id), Some(email)) => Some(IdentityUser {
                id,
                email: email.clone(),
            }),
            _ => None,
        }
    }

    /// The session issued at signup, when the account was auto-confirmed.
    pub fn session(&self) -> Option<ProviderSession> {
        match (&self.access_token, &self.user) {
            (Some(access_token), Some(user)) => Some(ProviderSession {
                access_token: access_token.clone(),
                refresh_token: self.refresh_token.clone(),
                expires_in: self.expires_in,
                user: user.clone(),
            }),
            _ => None,
        }
    }
}
