use autostop_api_identity::models::ProviderSession;
use autostop_core::{client::SessionTokens, session::local_part, AuthStateEvent};
use tracing::{info, warn};

use crate::{profile::resolve_current_user, SessionClient};

impl SessionClient {
    /// Entry point for provider-initiated auth-state push notifications.
    ///
    /// The host transport feeds each notification here, independently of and
    /// concurrently with any in-flight explicit call. A present session
    /// stores its tokens, joins the profile row, replaces the current user
    /// and broadcasts `LoggedIn`; an absent session clears tokens and
    /// current user and broadcasts `LoggedOut`. The current user is
    /// last-write-wins between this path and the explicit operations.
    pub async fn handle_auth_state(&self, session: Option<ProviderSession>) {
        let internal = &self.client.internal;

        match session {
            Some(session) => {
                info!("auth state changed: signed in");
                internal.set_session_tokens(SessionTokens {
                    access_token: session.access_token.clone(),
                    refresh_token: session.refresh_token.clone(),
                    expires_in: session.expires_in,
                });

                let config = internal.get_api_configurations();
                let fallback = local_part(&session.user.email).to_string();
                let user = resolve_current_user(&config, session.user.id, &fallback).await;

                internal.session_state().set(user.clone());
                internal.publish_auth_event(AuthStateEvent::LoggedIn(user));
            }
            None => {
                info!("auth state changed: signed out");
                internal.clear_session_tokens();
                internal.session_state().clear();
                internal.publish_auth_event(AuthStateEvent::LoggedOut);
            }
        }
    }

    /// Startup hook: checks for an existing session once, updating the
    /// current user. The outcome is logged and otherwise not surfaced.
    pub async fn bootstrap(&self) {
        match self.check_session().await {
            Ok(Some(user)) => info!("startup session check: signed in as {}", user.username),
            Ok(None) => info!("startup session check: not authenticated"),
            Err(e) => warn!("startup session check failed: {e}"),
        }
    }
}
