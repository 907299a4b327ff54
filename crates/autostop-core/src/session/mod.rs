//! Session state: the process-wide current user, the synthetic-address
//! scheme, and the local auth-state event surface.

mod address;
mod events;
mod state;

pub use address::{is_valid_username, local_part, synthetic_address, InvalidUsernameError};
pub use events::AuthStateEvent;
pub use state::{CurrentUser, SessionState};
