use autostop_api_identity::apis::logout_post;
use autostop_core::{ApiError, AuthStateEvent, NotAuthenticatedError};
use thiserror::Error;
use tracing::info;

use crate::SessionClient;

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LogoutError {
    #[error(transparent)]
    NotAuthenticated(#[from] NotAuthenticatedError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SessionClient {
    /// Signs the session out at the provider.
    ///
    /// Local state is cleared only after the provider confirms: a failed
    /// sign-out leaves the current user and the stored tokens untouched and
    /// reports the error. On success a single `LoggedOut` event is
    /// broadcast.
    pub async fn logout(&self) -> Result<(), LogoutError> {
        let internal = &self.client.internal;

        if !internal.is_authenticated() {
            return Err(NotAuthenticatedError.into());
        }

        let config = internal.get_api_configurations();
        logout_post(&config.identity).await.map_err(ApiError::from)?;

        internal.clear_session_tokens();
        internal.session_state().clear();
        internal.publish_auth_event(AuthStateEvent::LoggedOut);

        info!("user logged out");
        Ok(())
    }
}
