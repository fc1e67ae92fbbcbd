//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the signed-in chrome and shared list surfaces while
//! reading shared state from Leptos context providers.

pub mod data_table;
pub mod layout;
pub mod notice_tray;
pub mod placeholder;
