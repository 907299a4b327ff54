use serde::{Deserialize, Serialize};

/// Payload for `POST /token?grant_type=password`.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenPasswordRequest {
    /// Synthetic address of the account.
    pub email: String,
    /// Raw password; verification is the provider's responsibility.
    pub password: String,
}
