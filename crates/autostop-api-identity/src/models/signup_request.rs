use serde::{Deserialize, Serialize};

/// Payload for `POST /signup`.
#[derive(Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    /// Synthetic address used as the account identifier.
    pub email: String,
    /// Raw password; hashing is the provider's responsibility.
    pub password: String,
    /// User metadata stored alongside the account.
    pub data: SignupMetadata,
}

/// Metadata tag attached to the account at creation.
#[derive(Serialize, Deserialize, Debug)]
pub struct SignupMetadata {
    /// The raw username the synthetic address was derived from.
    pub username: String,
}
