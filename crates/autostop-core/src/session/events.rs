use crate::CurrentUser;

/// Auth-state notifications broadcast on the client's local event surface.
///
/// Events are emitted by explicit sign-outs and by the provider-initiated
/// push path; interested local listeners subscribe via
/// [`crate::client::InternalClient::subscribe_auth_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStateEvent {
    /// A session was established or replaced; carries the resolved user.
    LoggedIn(CurrentUser),
    /// The session ended.
    LoggedOut,
}
