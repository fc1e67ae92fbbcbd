//! Menu list and menu detail pages (not yet built out).

use leptos::prelude::*;

use crate::components::placeholder::PlaceholderPage;

#[component]
pub fn MenuListPage() -> impl IntoView {
    view! { <PlaceholderPage title="Menus" description="Register, edit and delete menus."/> }
}

#[component]
pub fn MenuDetailPage() -> impl IntoView {
    view! {
        <PlaceholderPage
            title="Menu detail"
            description="Shows menu details and cost calculation."
        />
    }
}
