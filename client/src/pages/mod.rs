//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own route-specific data loading and compose reusable components for
//! each major client screen. Each page fetches on mount, independently of its
//! siblings.

pub mod dashboard;
pub mod login;
pub mod materials;
pub mod menus;
pub mod users;

use api::ApiError;

/// Collapse a failed list fetch to an empty list.
///
/// The HTTP layer has already notified the user, so failures only log.
pub fn rows_or_empty<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        leptos::logging::warn!("{what} fetch failed: {e}");
        Vec::new()
    })
}
