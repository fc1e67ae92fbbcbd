//! Browser adapters for the api crate's session and navigation seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token and the signed-in user are kept in `localStorage` under the
//! `token` and `user` keys so a reload restores the session. A rejected
//! session sends the browser to `/login` with a full location change, which
//! also drops every in-memory signal. On `/login` itself the location is
//! left alone so the login form can show the failure.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use api::{Navigator, SessionStore, StoredSession, User};

use crate::util::auth::LOGIN_ROUTE;
use crate::util::storage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// `SessionStore` backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Option<String> {
        storage::get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn user(&self) -> Option<User> {
        storage::get_item(USER_KEY).and_then(|raw| decode_user(&raw))
    }

    fn save(&self, session: &StoredSession) {
        storage::set_item(TOKEN_KEY, &session.token);
        match session.user.as_ref().and_then(encode_user) {
            Some(raw) => storage::set_item(USER_KEY, &raw),
            None => storage::remove_item(USER_KEY),
        }
    }

    fn clear(&self) {
        storage::remove_item(TOKEN_KEY);
        storage::remove_item(USER_KEY);
    }
}

/// `Navigator` that replaces the page location.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect_to_login(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                let pathname = location.pathname().unwrap_or_default();
                if crate::util::auth::needs_login_redirect(&pathname) {
                    let _ = location.set_href(LOGIN_ROUTE);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::log!("redirect to {LOGIN_ROUTE} skipped outside the browser");
        }
    }
}

/// Parse the stored user, discarding malformed entries.
pub fn decode_user(raw: &str) -> Option<User> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            leptos::logging::warn!("ignoring stored user: {e}");
            None
        }
    }
}

pub fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}
