//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the login page apply identical redirect rules.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/dashboard";

/// Whether a protected route should bounce to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Whether a rejected session needs a location change to reach `/login`.
pub fn needs_login_redirect(pathname: &str) -> bool {
    pathname.trim_end_matches('/') != LOGIN_ROUTE
}

/// Whether the login page should move on to the dashboard.
pub fn should_leave_login(state: &AuthState) -> bool {
    state.user.is_some()
}

/// Redirect to `/login` whenever auth has settled and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to the dashboard as soon as a user is signed in.
pub fn install_home_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_leave_login(&auth.get()) {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });
}
