use serde::{Deserialize, Serialize};

/// The provider's view of a user account.
///
/// The provider returns many more fields (confirmation timestamps, app
/// metadata, etc.); only the two the SDK reads are modelled here. Unknown
/// fields are ignored on deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IdentityUser {
    /// Stable account identifier, assigned by the provider.
    pub id: uuid::Uuid,
    /// The synthetic address the account was created with.
    pub email: String,
}
