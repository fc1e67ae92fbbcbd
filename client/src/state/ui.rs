//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth and notice state so the
//! layout can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

pub const UI_STATE_KEY: &str = "menu_ui_state";

/// Layout chrome flags, persisted across reloads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default)]
    pub nav_collapsed: bool,
}

impl UiState {
    pub fn load() -> Self {
        storage::load_json(UI_STATE_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        storage::save_json(UI_STATE_KEY, self);
    }

    pub fn toggle_nav(&mut self) {
        self.nav_collapsed = !self.nav_collapsed;
    }
}
