//! Login page: username + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page only checks that both fields are present. The actual sign-in is
//! a caller-supplied [`LoginHandler`] so routing and session persistence stay
//! in `app`. Each valid submission invokes the handler exactly once and its
//! outcome becomes a notice.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use api::{LoginRequest, Notice};
use leptos::prelude::*;

use crate::state::notice::NoticeState;

pub const USERNAME_REQUIRED: &str = "Please enter your username";
pub const PASSWORD_REQUIRED: &str = "Please enter your password";
pub const LOGIN_SUCCEEDED: &str = "Logged in";
pub const ADMIN_HINT: &str = "Initial administrator: admin / admin123";

pub type LoginFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Performs a sign-in; `Err` carries the user-facing failure text.
#[derive(Clone)]
pub struct LoginHandler(Arc<dyn Fn(LoginRequest) -> LoginFuture + Send + Sync>);

impl LoginHandler {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(LoginRequest) -> LoginFuture + Send + Sync + 'static,
    {
        Self(Arc::new(handler))
    }

    pub fn call(&self, request: LoginRequest) -> LoginFuture {
        (self.0)(request)
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Require both fields after trimming. The username is sent trimmed, the
/// password as typed.
pub fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, FieldErrors> {
    let username = username.trim();
    let errors = FieldErrors {
        username: username.is_empty().then_some(USERNAME_REQUIRED),
        password: password.trim().is_empty().then_some(PASSWORD_REQUIRED),
    };
    if errors != FieldErrors::default() {
        return Err(errors);
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Validate and, only when valid, start the handler once.
pub fn submit_login(username: &str, password: &str, handler: &LoginHandler) -> Result<LoginFuture, FieldErrors> {
    validate_login_input(username, password).map(|request| handler.call(request))
}

pub fn login_notice(result: &Result<(), String>) -> Notice {
    match result {
        Ok(()) => Notice::success(LOGIN_SUCCEEDED),
        Err(message) => Notice::error(message.clone()),
    }
}

#[component]
pub fn LoginPage(on_login: LoginHandler) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match submit_login(&username.get_untracked(), &password.get_untracked(), &on_login) {
            Err(field_errors) => errors.set(field_errors),
            Ok(pending) => {
                errors.set(FieldErrors::default());
                busy.set(true);
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    use api::Notifier;
                    let result = pending.await;
                    crate::state::notice::SignalNotifier::new(notices).notify(login_notice(&result));
                    busy.set(false);
                });
                #[cfg(not(feature = "csr"))]
                {
                    drop(pending);
                    let _ = notices;
                    busy.set(false);
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Menu Management System"</h1>
                <form class="login-form" autocomplete="off" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.get().username.is_some()>
                        <p class="login-field-error">{move || errors.get().username.unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.get().password.is_some()>
                        <p class="login-field-error">{move || errors.get().password.unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="login-hint">{ADMIN_HINT}</p>
            </div>
        </div>
    }
}
