//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the layout to coordinate login redirects and
//! role-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use api::{ApiError, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State at startup: the cached user, still loading while a refresh runs.
    pub fn restored(user: Option<User>) -> Self {
        Self { loading: user.is_some(), user }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    /// Fold a `/auth/me` refresh into the state.
    ///
    /// A rejected session signs out; other failures keep the cached user.
    pub fn apply_refresh(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => self.user = Some(user),
            Err(ApiError::Unauthorized { .. }) => self.user = None,
            Err(e) => leptos::logging::warn!("keeping cached user after refresh failure: {e}"),
        }
        self.loading = false;
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_admin())
    }
}
