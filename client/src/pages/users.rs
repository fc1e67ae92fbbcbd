//! User management page (admin only, not yet built out).

use leptos::prelude::*;

use crate::components::placeholder::PlaceholderPage;

#[component]
pub fn UserManagementPage() -> impl IntoView {
    view! {
        <PlaceholderPage
            title="User management"
            description="Register, edit and delete system users. (Administrator privileges required)"
        />
    }
}
