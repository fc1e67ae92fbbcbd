//! Corner stack of transient notices.

use api::NoticeLevel;
use leptos::prelude::*;

use crate::state::notice::NoticeState;

pub fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Info => "notice notice--info",
        NoticeLevel::Error => "notice notice--error",
    }
}

/// Renders every pending notice; click dismisses one.
#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray">
            <For
                each=move || notices.get().entries
                key=|entry| entry.id.clone()
                children=move |entry| {
                    let id = entry.id.clone();
                    view! {
                        <div
                            class=level_class(entry.notice.level)
                            role="status"
                            on:click=move |_| notices.update(|s| s.dismiss(&id))
                        >
                            {entry.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
