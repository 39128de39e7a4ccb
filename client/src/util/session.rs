//! Browser `localStorage` glue for the login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow (outside this app) stores the bearer token and role label
//! under `token` and `role`. These helpers read them back on hydrate; on the
//! server they always yield an anonymous session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::state::auth::{AuthState, Role};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// Load a raw string value from `localStorage` for `key`.
pub fn load_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Build the session from stored values.
pub fn session_from_items(token: Option<String>, role: Option<String>) -> AuthState {
    let role = role.as_deref().map_or(Role::Anonymous, Role::parse);
    AuthState::new(token, role)
}

/// Current browser session, or anonymous when nothing is stored.
pub fn load_session() -> AuthState {
    session_from_items(load_item(TOKEN_KEY), load_item(ROLE_KEY))
}
