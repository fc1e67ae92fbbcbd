//! # client
//!
//! Leptos + WASM front-end for the menu management system: dashboard,
//! material list, menu and user views, and the login flow.
//!
//! This crate contains pages, components, application state and the browser
//! adapters (fetch transport, `localStorage` session, location redirect) that
//! plug into the shared `api` client. Browser-only code is gated behind the
//! `csr` feature so the pure view logic tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
