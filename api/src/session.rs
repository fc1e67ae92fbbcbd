//! Persisted session (bearer token + user) and the sign-in/out flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is written at login, read by `AuthLayer` on every request and
//! cleared on logout or by `ErrorLayer` on any `401`. Token and user always
//! live and die together.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::auth;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{LoginRequest, User};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Platform storage for the current session.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn user(&self) -> Option<User>;
    fn save(&self, session: &StoredSession);
    fn clear(&self);
}

/// In-process store for tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_session(session: StoredSession) -> Self {
        Self { inner: Mutex::new(Some(session)) }
    }

    fn read(&self) -> Option<StoredSession> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }

    fn write(&self, session: Option<StoredSession>) {
        *self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = session;
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.read().map(|s| s.token)
    }

    fn user(&self) -> Option<User> {
        self.read().and_then(|s| s.user)
    }

    fn save(&self, session: &StoredSession) {
        self.write(Some(session.clone()));
    }

    fn clear(&self) {
        self.write(None);
    }
}

// =============================================================================
// FLOWS
// =============================================================================

/// Log in, persist the session, and return the signed-in user.
///
/// When the login response omits the user it is fetched from `/auth/me`
/// with the fresh token.
///
/// # Errors
///
/// Returns the user-facing failure text: the server's message when it sent
/// one, otherwise [`LOGIN_FAILED_MESSAGE`].
pub async fn sign_in(client: &ApiClient, credentials: &LoginRequest) -> Result<User, String> {
    let response = auth::login(client, credentials).await.map_err(|e| login_error_text(&e))?;
    let user = match response.user {
        Some(user) => user,
        None => {
            client.session().save(&StoredSession { token: response.access_token.clone(), user: None });
            auth::current_user(client).await.map_err(|e| {
                client.session().clear();
                login_error_text(&e)
            })?
        }
    };
    client.session().save(&StoredSession { token: response.access_token, user: Some(user.clone()) });
    tracing::info!(username = %user.username, role = user.role.as_str(), "signed in");
    Ok(user)
}

/// Drop the stored session.
pub fn sign_out(client: &ApiClient) {
    client.session().clear();
    tracing::info!("signed out");
}

/// The cached user, if a token is also present.
#[must_use]
pub fn restore(client: &ApiClient) -> Option<User> {
    client.session().token()?;
    client.session().user()
}

/// Re-fetch the current user and update the cached copy.
///
/// # Errors
///
/// Propagates the request error; a `401` has already cleared the session.
pub async fn refresh(client: &ApiClient) -> Result<User, ApiError> {
    let user = auth::current_user(client).await?;
    if let Some(token) = client.session().token() {
        client.session().save(&StoredSession { token, user: Some(user.clone()) });
    }
    Ok(user)
}

fn login_error_text(err: &ApiError) -> String {
    err.server_message().unwrap_or(LOGIN_FAILED_MESSAGE).to_owned()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
