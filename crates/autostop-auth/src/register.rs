use autostop_api_data::{apis::profiles_insert_post, models::ProfileRecord};
use autostop_api_identity::{
    apis::signup_post,
    models::{AuthErrorResponse, SignupMetadata, SignupRequest},
};
use autostop_core::{
    client::SessionTokens, require, session::synthetic_address, ApiError, InvalidUsernameError,
    MissingFieldError, UserId,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::SessionClient;

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Outcome of a successful registration.
///
/// The profile insert is a best-effort secondary write: its failure never
/// fails the registration (the account already exists in the provider), but
/// it is reported here so the caller can decide whether to surface it.
#[derive(Debug)]
pub struct RegisterResponse {
    /// Identifier of the newly created account.
    pub user_id: UserId,
    /// Synthetic address the account was created with.
    pub email: String,
    /// Result of the secondary profile-row insert.
    pub profile: Result<(), ApiError>,
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error(transparent)]
    InvalidUsername(#[from] InvalidUsernameError),
    /// The provider rejected account creation (duplicate address, weak
    /// password, ...).
    #[error("Registration rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

impl SessionClient {
    /// Creates a provider account for the username and inserts the matching
    /// profile row.
    ///
    /// The username is transformed into a synthetic address before being
    /// handed to the provider; the raw username travels as account metadata
    /// and in the profile row.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, RegisterError> {
        let internal = &self.client.internal;
        info!("registering user: {}", request.username);

        let email = synthetic_address(&request.username, internal.account_domain())?;

        let config = internal.get_api_configurations();
        let response = signup_post(
            &config.identity,
            &SignupRequest {
                email: email.clone(),
                password: request.password.clone(),
                data: SignupMetadata {
                    username: request.username.clone(),
                },
            },
        )
        .await
        .map_err(signup_rejection)?;

        let identity = require!(response.identity());

        // An auto-confirming provider issues a session straight away; store
        // it so the profile insert runs with the user's own token.
        if let Some(session) = response.session() {
            internal.set_session_tokens(SessionTokens {
                access_token: session.access_token,
                refresh_token: session.refresh_token,
                expires_in: session.expires_in,
            });
        }

        let config = internal.get_api_configurations();
        let profile = profiles_insert_post(
            &config.data,
            &ProfileRecord {
                id: identity.id,
                username: request.username.clone(),
                email,
                avatar: None,
                created_at: Utc::now(),
            },
        )
        .await
        .map_err(ApiError::from);

        if let Err(e) = &profile {
            // The account exists in the provider; the profile gap is
            // tolerated and only logged.
            warn!("profile insert failed for {}: {e}", request.username);
        }

        info!("user registered: {}", request.username);
        Ok(RegisterResponse {
            user_id: UserId::new(identity.id),
            email: identity.email,
            profile,
        })
    }
}

fn signup_rejection(e: autostop_api_base::Error) -> RegisterError {
    match e {
        autostop_api_base::Error::Response { status, content } if status.is_client_error() => {
            RegisterError::Rejected(AuthErrorResponse::message_from_body(&content))
        }
        other => RegisterError::Api(other.into()),
    }
}
