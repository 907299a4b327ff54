use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full profile row, as inserted at registration.
///
/// The row is created once and never deleted by the SDK; the provider
/// account is the source of truth and the profile is secondary metadata.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProfileRecord {
    /// Provider account id the row is keyed by.
    pub id: uuid::Uuid,
    /// Raw username the account was registered with.
    pub username: String,
    /// Synthetic address of the account.
    pub email: String,
    /// Optional avatar reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// The projection read on login and session checks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    /// Raw username the account was registered with.
    pub username: String,
    /// Optional avatar reference.
    #[serde(default)]
    pub avatar: Option<String>,
}
