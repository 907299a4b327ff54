use autostop_api_identity::{
    apis::token_password_post,
    models::{AuthErrorResponse, TokenPasswordRequest},
};
use autostop_core::{
    client::SessionTokens, session::synthetic_address, ApiError, CurrentUser, InvalidUsernameError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{profile::resolve_current_user, SessionClient};

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    InvalidUsername(#[from] InvalidUsernameError),
    /// The provider rejected the credentials.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SessionClient {
    /// Signs in with a username and password.
    ///
    /// On success the session tokens are stored, the profile row is joined
    /// (a missing row falls back to the supplied username), and the current
    /// user is replaced with the result.
    pub async fn login(&self, request: &LoginRequest) -> Result<CurrentUser, LoginError> {
        let internal = &self.client.internal;
        info!("logging in user: {}", request.username);

        let email = synthetic_address(&request.username, internal.account_domain())?;

        let config = internal.get_api_configurations();
        let session = token_password_post(
            &config.identity,
            &TokenPasswordRequest {
                email,
                password: request.password.clone(),
            },
        )
        .await
        .map_err(login_rejection)?;

        internal.set_session_tokens(SessionTokens {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
        });

        let config = internal.get_api_configurations();
        let user = resolve_current_user(&config, session.user.id, &request.username).await;
        internal.session_state().set(user.clone());

        info!("login succeeded: {}", user.username);
        Ok(user)
    }
}

fn login_rejection(e: autostop_api_base::Error) -> LoginError {
    match e {
        autostop_api_base::Error::Response { status, content } if status.is_client_error() => {
            LoginError::InvalidCredentials(AuthErrorResponse::message_from_body(&content))
        }
        other => LoginError::Api(other.into()),
    }
}
