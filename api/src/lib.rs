//! Typed REST client for the menu management backend.
//!
//! This crate owns everything the browser app and the CLI share: the data
//! model, the request-executing [`Transport`] seam, the middleware chain that
//! injects the bearer token and translates error responses, the session store
//! seam, and one async function per backend operation.
//!
//! LAYERING
//! ========
//! `ApiClient` -> `ErrorLayer` -> `AuthLayer` -> platform `Transport`.
//! Platform crates supply the bottom transport (`gloo-net` in the browser,
//! `reqwest` natively) plus session/notification/navigation adapters.

pub mod auth;
pub mod config;
pub mod demo;
pub mod error;
pub mod http;
pub mod materials;
pub mod menus;
pub mod middleware;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ApiConfig;
pub use error::{ApiError, ConfigError};
pub use http::{ApiClient, ApiRequest, ApiResponse, Method, Transport};
pub use middleware::{Hooks, Navigator, Notice, NoticeLevel, Notifier};
pub use session::{MemorySessionStore, SessionStore, StoredSession};
pub use types::{ListQuery, LoginRequest, Material, Menu, Role, User};
