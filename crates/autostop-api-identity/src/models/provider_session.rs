use serde::{Deserialize, Serialize};

use super::IdentityUser;

/// A session issued by the provider.
///
/// This is the shape of a successful password-grant response, and also the
/// payload carried by provider-initiated auth-state push notifications.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProviderSession {
    /// Bearer token for subsequent authenticated requests.
    pub access_token: String,
    /// Token used by the provider to mint a new access token.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token, in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// The account the session belongs to.
    pub user: IdentityUser,
}
