//! Transient notification tray state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The api middleware reports session expiry and request failures through
//! [`Notifier`]; pages add their own success notices. Entries expire on their
//! own after [`NOTICE_TTL`] or when dismissed.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::time::Duration;

use api::{Notice, Notifier};
use leptos::prelude::*;

pub const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeEntry {
    pub id: String,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub entries: Vec<NoticeEntry>,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.entries.push(NoticeEntry { id: id.clone(), notice });
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
    }
}

/// [`Notifier`] that feeds the tray signal.
#[derive(Clone, Copy)]
pub struct SignalNotifier {
    notices: RwSignal<NoticeState>,
}

impl SignalNotifier {
    pub fn new(notices: RwSignal<NoticeState>) -> Self {
        Self { notices }
    }
}

impl Notifier for SignalNotifier {
    fn notify(&self, notice: Notice) {
        let Some(id) = self.notices.try_update(|s| s.push(notice)) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let notices = self.notices;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(NOTICE_TTL).await;
                notices.try_update(|s| s.dismiss(&id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}
