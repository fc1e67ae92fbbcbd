//! Page header plus an "in progress" body for views not yet built out.

use leptos::prelude::*;

#[component]
pub fn PlaceholderPage(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h2 class="page-title">{title}</h2>
                <p>{description}</p>
            </div>
            <div class="page-placeholder">{format!("{title} (in progress)")}</div>
        </div>
    }
}
