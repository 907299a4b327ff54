use autostop_api_data::apis::profiles_select_get;
use autostop_core::{client::ApiConfigurations, CurrentUser, UserId};
use tracing::{debug, warn};

/// Joins a provider identity with its profile row.
///
/// A missing row falls back to `fallback_username`; an unreadable row is
/// logged and treated the same way. Neither is an error: the provider
/// account is the source of truth and the profile is secondary metadata.
pub(crate) async fn resolve_current_user(
    config: &ApiConfigurations,
    id: uuid::Uuid,
    fallback_username: &str,
) -> CurrentUser {
    let row = match profiles_select_get(&config.data, id).await {
        Ok(row) => row,
        Err(e) => {
            warn!("profile lookup failed for {id}: {e}");
            None
        }
    };

    match row {
        Some(row) => CurrentUser {
            id: UserId::new(id),
            username: row.username,
            avatar: row.avatar,
        },
        None => {
            debug!("no profile row for {id}, falling back to {fallback_username}");
            CurrentUser {
                id: UserId::new(id),
                username: fallback_username.to_string(),
                avatar: None,
            }
        }
    }
}
