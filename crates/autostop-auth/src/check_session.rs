use autostop_api_identity::apis::user_get;
use autostop_core::{session::local_part, ApiError, CurrentUser};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::{profile::resolve_current_user, SessionClient};

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CheckSessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SessionClient {
    /// Asks the provider whether a valid session exists.
    ///
    /// `Ok(None)` is the normal not-authenticated state, not a failure; only
    /// communication failures are errors. A live session is joined with the
    /// profile row (fallback: the local part of the session's address) and
    /// replaces the current user. Repeated checks against an unchanged
    /// session yield the same user.
    pub async fn check_session(&self) -> Result<Option<CurrentUser>, CheckSessionError> {
        let internal = &self.client.internal;

        if !internal.is_authenticated() {
            debug!("session check: no stored session");
            return Ok(None);
        }

        let config = internal.get_api_configurations();
        let user = match user_get(&config.identity).await {
            Ok(user) => user,
            Err(autostop_api_base::Error::Response { status, .. })
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN =>
            {
                // The provider no longer recognizes the token; drop it. The
                // current user is only cleared by logout or a signed-out
                // push notification.
                debug!("session check: session no longer valid");
                internal.clear_session_tokens();
                return Ok(None);
            }
            Err(e) => return Err(ApiError::from(e).into()),
        };

        let fallback = local_part(&user.email).to_string();
        let current = resolve_current_user(&config, user.id, &fallback).await;
        internal.session_state().set(current.clone());

        debug!("session check: session found for {}", current.username);
        Ok(Some(current))
    }
}
