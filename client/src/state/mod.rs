//! Client-side application state shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each submodule owns one plain state struct. `app::App` wraps each in an
//! `RwSignal` and provides it to the component tree.

pub mod auth;
pub mod notice;
pub mod ui;
