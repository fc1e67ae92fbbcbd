//! Middleware layers wrapped around a [`Transport`].
//!
//! - [`AuthLayer`] attaches `Authorization: Bearer <token>` when the session
//!   store holds a token.
//! - [`ErrorLayer`] turns non-success responses into [`ApiError`] values and
//!   runs the side effects every caller would otherwise repeat: clearing the
//!   session and redirecting on `401`, notifying the user otherwise.

use std::sync::Arc;

use crate::error::{ApiError, SESSION_EXPIRED_MESSAGE};
use crate::http::{AUTHORIZATION, ApiRequest, ApiResponse, Transport};
use crate::session::SessionStore;

// =============================================================================
// NOTICES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A transient user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Surfaces notices to the user (toast tray, stderr, ...).
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Moves the application to its login view.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Platform adapters the middleware needs.
#[derive(Clone)]
pub struct Hooks {
    pub session: Arc<dyn SessionStore>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

// =============================================================================
// AUTH LAYER
// =============================================================================

#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub struct AuthLayer<T> {
    inner: T,
    session: Arc<dyn SessionStore>,
}

impl<T> AuthLayer<T> {
    pub fn new(inner: T, session: Arc<dyn SessionStore>) -> Self {
        Self { inner, session }
    }
}

#[async_trait::async_trait(?Send)]
impl<T: Transport> Transport for AuthLayer<T> {
    async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        if let Some(token) = self.session.token().filter(|t| !t.is_empty()) {
            request.set_header(AUTHORIZATION, bearer(&token));
        }
        self.inner.execute(request).await
    }
}

// =============================================================================
// ERROR LAYER
// =============================================================================

pub struct ErrorLayer<T> {
    inner: T,
    hooks: Hooks,
}

impl<T> ErrorLayer<T> {
    pub fn new(inner: T, hooks: Hooks) -> Self {
        Self { inner, hooks }
    }

    fn reject(&self, path: &str, response: &ApiResponse) -> ApiError {
        let message = server_message(&response.body);
        if response.status == 401 {
            tracing::warn!(%path, "session rejected; clearing stored credentials");
            self.hooks.session.clear();
            self.hooks.navigator.redirect_to_login();
            self.hooks.notifier.notify(Notice::error(SESSION_EXPIRED_MESSAGE));
            return ApiError::Unauthorized { message };
        }
        let err = ApiError::Server { status: response.status, message };
        tracing::warn!(%path, status = response.status, "api request failed");
        self.hooks.notifier.notify(Notice::error(err.user_message()));
        err
    }
}

#[async_trait::async_trait(?Send)]
impl<T: Transport> Transport for ErrorLayer<T> {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let path = request.path.clone();
        match self.inner.execute(request).await {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(self.reject(&path, &response)),
            Err(err) => {
                tracing::warn!(%path, error = %err, "api request did not complete");
                self.hooks.notifier.notify(Notice::error(err.user_message()));
                Err(err)
            }
        }
    }
}

/// Pull the `error` string out of a JSON error body.
#[must_use]
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod tests;
