use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::UserId;

/// The signed-in user, derived by joining the provider identity with the
/// profile row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Provider account id.
    pub id: UserId,
    /// Username from the profile row, or the fallback derived from the
    /// synthetic address.
    pub username: String,
    /// Optional avatar reference from the profile row.
    pub avatar: Option<String>,
}

/// Process-wide holder for the current user.
///
/// There is at most one value at a time and writes are last-write-wins:
/// explicit operations and the push-notification path both write here, with
/// no cross-operation ordering guarantee. A non-empty value always reflects
/// the most recent provider-confirmed session.
#[derive(Debug, Default)]
pub struct SessionState {
    current_user: RwLock<Option<CurrentUser>>,
}

impl SessionState {
    /// The current user, if a session has been confirmed.
    pub fn get(&self) -> Option<CurrentUser> {
        self.current_user
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    /// Replaces the current user, returning the previous value.
    pub fn set(&self, user: CurrentUser) -> Option<CurrentUser> {
        self.current_user
            .write()
            .expect("RwLock is not poisoned")
            .replace(user)
    }

    /// Clears the current user, returning the previous value.
    pub fn clear(&self) -> Option<CurrentUser> {
        self.current_user
            .write()
            .expect("RwLock is not poisoned")
            .take()
    }
}
