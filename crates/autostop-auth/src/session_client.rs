use autostop_core::{AuthStateEvent, Client, CurrentUser};
use tokio::sync::broadcast;

/// Subclient containing session-gateway functionality.
///
/// The `SessionClient` is a façade over the hosted provider: it forwards
/// credential operations, joins the resulting identity with the profile
/// row, and keeps the client's process-wide current user in sync.
#[derive(Clone)]
pub struct SessionClient {
    pub(crate) client: Client,
}

impl SessionClient {
    /// Constructs a new `SessionClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The current user, if a session has been confirmed.
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.client.internal.session_state().get()
    }

    /// Subscribes to the local auth-state event surface ("user logged in" /
    /// "user logged out"). The subscription only sees events broadcast after
    /// its creation.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthStateEvent> {
        self.client.internal.subscribe_auth_events()
    }
}

/// Extension trait for `Client` to provide access to the `SessionClient`.
pub trait SessionClientExt {
    /// Creates a new `SessionClient` instance.
    fn sessions(&self) -> SessionClient;
}

impl SessionClientExt for Client {
    fn sessions(&self) -> SessionClient {
        SessionClient::new(self.clone())
    }
}
