//! Request/response envelope, the `Transport` seam, and the layered client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every endpoint function goes through [`ApiClient`], which builds an
//! [`ApiRequest`] against the configured base URL and hands it to the
//! middleware stack. Platform crates only implement [`Transport`].

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::middleware::{AuthLayer, ErrorLayer, Hooks};
use crate::session::SessionStore;
use crate::types::ListQuery;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully-resolved outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, e.g. `/materials/3`.
    pub path: String,
    /// `{base_url}{path}`.
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body.
    pub body: Option<String>,
    pub timeout: Duration,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set a header, replacing any existing value with the same name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
    }
}

/// Raw response as received by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one request.
///
/// Implementations return `Ok` for every HTTP response regardless of status
/// and `Err(ApiError::Transport)` only when no response was received.
/// Futures are `?Send` so browser fetch futures qualify.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[async_trait::async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).execute(request).await
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Cheap-to-clone handle over the middleware stack.
#[derive(Clone)]
pub struct ApiClient {
    stack: Arc<dyn Transport>,
    session: Arc<dyn SessionStore>,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Wrap `transport` in the auth and error layers.
    pub fn new<T: Transport + 'static>(config: &ApiConfig, transport: T, hooks: Hooks) -> Self {
        let session = hooks.session.clone();
        let stack = ErrorLayer::new(AuthLayer::new(transport, session.clone()), hooks);
        Self { stack: Arc::new(stack), session, base_url: config.base_url.clone(), timeout: config.timeout() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Build a JSON request for `path` with the configured timeout.
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest {
            method,
            path: path.to_owned(),
            url: format!("{}{}", self.base_url, path),
            query: Vec::new(),
            headers: vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned())],
            body: None,
            timeout: self.timeout,
        }
    }

    /// Run a request through the middleware stack.
    ///
    /// # Errors
    ///
    /// Returns whatever the stack reports; see [`ApiError`].
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "api request");
        self.stack.execute(request).await
    }

    /// `GET path?query` and decode the body.
    ///
    /// # Errors
    ///
    /// Propagates stack errors and returns [`ApiError::Decode`] on shape mismatch.
    pub async fn get<R: DeserializeOwned>(&self, path: &str, query: &ListQuery) -> Result<R, ApiError> {
        let mut request = self.request(Method::Get, path);
        request.query = query.pairs().to_vec();
        decode(&self.send(request).await?)
    }

    /// `POST path` with a JSON body and decode the response.
    ///
    /// # Errors
    ///
    /// Propagates stack errors and returns [`ApiError::Decode`] on shape mismatch.
    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let request = self.with_body(Method::Post, path, body)?;
        decode(&self.send(request).await?)
    }

    /// `POST path` with a JSON body, discarding the response body.
    ///
    /// # Errors
    ///
    /// Propagates stack errors.
    pub async fn post_discard<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self.with_body(Method::Post, path, body)?;
        self.send(request).await.map(|_| ())
    }

    /// `PUT path` with a JSON body and decode the response.
    ///
    /// # Errors
    ///
    /// Propagates stack errors and returns [`ApiError::Decode`] on shape mismatch.
    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let request = self.with_body(Method::Put, path, body)?;
        decode(&self.send(request).await?)
    }

    /// `DELETE path`, discarding the response body.
    ///
    /// # Errors
    ///
    /// Propagates stack errors.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::Delete, path)).await.map(|_| ())
    }

    fn with_body<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> Result<ApiRequest, ApiError> {
        let mut request = self.request(method, path);
        request.body = Some(serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?);
        Ok(request)
    }
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        tracing::warn!(error = %e, "api response did not match expected shape");
        ApiError::Decode(e.to_string())
    })
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
