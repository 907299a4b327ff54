use std::sync::{Arc, RwLock};

use autostop_api_base::Configuration;
use tokio::sync::broadcast;
use tracing::debug;

use crate::session::{AuthStateEvent, SessionState};

/// Size of the auth-state broadcast buffer. Subscribers that lag further
/// behind than this lose the oldest events.
const AUTH_EVENT_CHANNEL_CAPACITY: usize = 16;

/// Configurations for the two provider API surfaces.
#[derive(Debug)]
pub struct ApiConfigurations {
    /// Auth endpoints (`/auth/v1`).
    pub identity: Configuration,
    /// Row API (`/rest/v1`).
    pub data: Configuration,
}

impl ApiConfigurations {
    pub(crate) fn new(identity: Configuration, data: Configuration) -> Arc<Self> {
        Arc::new(Self { identity, data })
    }

    /// Installs (or removes) the user access token on both surfaces.
    pub fn set_access_token(self: &mut Arc<Self>, token: Option<String>) {
        let mut identity = self.identity.clone();
        let mut data = self.data.clone();

        identity.access_token = token.clone();
        data.access_token = token;

        *self = ApiConfigurations::new(identity, data);
    }
}

/// Session tokens issued by the provider, managed by the SDK.
///
/// Persistence across processes is out of scope; the tokens live for the
/// lifetime of the [`super::Client`].
#[derive(Debug, Clone)]
pub struct SessionTokens {
    /// Bearer token for authenticated requests.
    pub access_token: String,
    /// Token the provider can exchange for a new access token.
    pub refresh_token: Option<String>,
    /// Lifetime of the access token, in seconds.
    pub expires_in: Option<i64>,
}

#[allow(missing_docs)]
#[derive(Debug)]
pub struct InternalClient {
    pub(crate) tokens: RwLock<Option<SessionTokens>>,
    pub(crate) session_state: SessionState,
    pub(crate) auth_events: broadcast::Sender<AuthStateEvent>,
    pub(crate) account_domain: String,

    /// Use InternalClient::get_api_configurations() to access this.
    #[doc(hidden)]
    pub __api_configurations: RwLock<Arc<ApiConfigurations>>,
}

impl InternalClient {
    pub(crate) fn new(
        identity: Configuration,
        data: Configuration,
        account_domain: String,
    ) -> Self {
        let (auth_events, _) = broadcast::channel(AUTH_EVENT_CHANNEL_CAPACITY);
        Self {
            tokens: RwLock::new(None),
            session_state: SessionState::default(),
            auth_events,
            account_domain,
            __api_configurations: RwLock::new(ApiConfigurations::new(identity, data)),
        }
    }

    /// Current API configurations, with the latest stored access token applied.
    pub fn get_api_configurations(&self) -> Arc<ApiConfigurations> {
        self.__api_configurations
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    /// Domain used for synthetic account addresses.
    pub fn account_domain(&self) -> &str {
        &self.account_domain
    }

    /// The process-wide current-user holder.
    pub fn session_state(&self) -> &SessionState {
        &self.session_state
    }

    /// Stores the session tokens and applies the access token to the API
    /// configurations. Last write wins.
    pub fn set_session_tokens(&self, tokens: SessionTokens) {
        debug!("storing session tokens");
        let access_token = tokens.access_token.clone();
        *self.tokens.write().expect("RwLock is not poisoned") = Some(tokens);
        self.__api_configurations
            .write()
            .expect("RwLock is not poisoned")
            .set_access_token(Some(access_token));
    }

    /// Drops the stored session tokens and removes the access token from the
    /// API configurations.
    pub fn clear_session_tokens(&self) {
        debug!("clearing session tokens");
        *self.tokens.write().expect("RwLock is not poisoned") = None;
        self.__api_configurations
            .write()
            .expect("RwLock is not poisoned")
            .set_access_token(None);
    }

    /// Whether session tokens are currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.tokens
            .read()
            .expect("RwLock is not poisoned")
            .is_some()
    }

    /// Broadcasts an auth-state event to all local subscribers.
    /// Having no subscribers is not an error.
    pub fn publish_auth_event(&self, event: AuthStateEvent) {
        let _ = self.auth_events.send(event);
    }

    /// Subscribes to auth-state events. The subscription will start buffering
    /// events after its creation; events broadcast before the subscription was
    /// created will not be returned.
    pub fn subscribe_auth_events(&self) -> broadcast::Receiver<AuthStateEvent> {
        self.auth_events.subscribe()
    }
}
