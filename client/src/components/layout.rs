//! Signed-in application shell: side navigation, header, user menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders inside [`AppLayout`]. Navigation entries
//! depend on the user's role; the entry matching the current path is
//! highlighted, including nested paths such as `/menus/:id`.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use api::{Role, User};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::ui::UiState;

/// One side-navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const DASHBOARD: NavItem = NavItem { path: "/dashboard", label: "Dashboard", icon: "▦" };
const MATERIALS: NavItem = NavItem { path: "/materials", label: "Materials", icon: "🛒" };
const MENUS: NavItem = NavItem { path: "/menus", label: "Menus", icon: "☰" };
const USERS: NavItem = NavItem { path: "/users", label: "Users", icon: "👤" };

/// Entries visible to `role`; user management is admin-only.
pub fn nav_items(role: &Role) -> Vec<NavItem> {
    let mut items = vec![DASHBOARD, MATERIALS, MENUS];
    if role.is_admin() {
        items.push(USERS);
    }
    items
}

/// The entry path to highlight for `pathname`, if any.
pub fn selected_path(items: &[NavItem], pathname: &str) -> Option<&'static str> {
    items
        .iter()
        .map(|item| item.path)
        .find(|path| pathname.strip_prefix(path).is_some_and(|rest| rest.is_empty() || rest.starts_with('/')))
}

pub fn brand_label(collapsed: bool) -> &'static str {
    if collapsed { "M" } else { "Menu" }
}

pub fn user_menu_label(user: &User) -> String {
    format!("{} ({})", user.username, user.role.display_name())
}

/// Layout wrapper for authenticated pages.
#[component]
pub fn AppLayout(user: User, on_logout: Callback<()>, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();
    let items = nav_items(&user.role);
    let user_label = user_menu_label(&user);
    let username = user.username.clone();
    let menu_open = RwSignal::new(false);

    let collapsed = move || ui.get().nav_collapsed;
    let on_toggle = move |_| {
        ui.update(UiState::toggle_nav);
        ui.get_untracked().save();
    };

    let nav = items
        .iter()
        .copied()
        .map(|item| {
            let items = items.clone();
            let navigate = navigate.clone();
            let is_selected = move || selected_path(&items, &location.pathname.get()) == Some(item.path);
            view! {
                <li
                    class="app-nav__item"
                    class:app-nav__item--selected=is_selected
                    on:click=move |_| navigate(item.path, NavigateOptions::default())
                >
                    <span class="app-nav__icon">{item.icon}</span>
                    <Show when=move || !collapsed()>
                        <span class="app-nav__label">{item.label}</span>
                    </Show>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="app-layout" class:app-layout--collapsed=collapsed>
            <aside class="app-sider">
                <div class="app-brand">{move || brand_label(collapsed())}</div>
                <ul class="app-nav">{nav}</ul>
            </aside>
            <div class="app-main">
                <header class="app-header">
                    <button class="app-header__toggle" title="Toggle navigation" on:click=on_toggle>
                        {move || if collapsed() { "»" } else { "«" }}
                    </button>
                    <div class="app-user" on:click=move |_| menu_open.update(|open| *open = !*open)>
                        <span class="app-user__avatar">"👤"</span>
                        <span class="app-user__name">{username}</span>
                        <Show when=move || menu_open.get()>
                            <ul class="app-user__menu">
                                <li class="app-user__menu-item app-user__menu-item--disabled">{user_label.clone()}</li>
                                <li class="app-user__menu-divider"></li>
                                <li class="app-user__menu-item" on:click=move |_| on_logout.run(())>
                                    "Logout"
                                </li>
                            </ul>
                        </Show>
                    </div>
                </header>
                <main class="app-content">{children()}</main>
            </div>
        </div>
    }
}
