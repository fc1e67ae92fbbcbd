//! Dashboard page: totals, recent menus/materials and system info.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Materials and menus are fetched
//! concurrently with a small limit; a failure of either collapses the whole
//! summary to its empty state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use api::{ApiError, Material, Menu};
use leptos::prelude::*;

use crate::util::format::{format_date, format_yen};

pub const FETCH_LIMIT: u32 = 10;
pub const RECENT_COUNT: usize = 5;
pub const STORE_COUNT: u32 = 30;
pub const STATUS_TEXT: &str = "Normal";
pub const NO_MENUS: &str = "No menus registered";
pub const NO_MATERIALS: &str = "No materials registered";
pub const SYSTEM_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SYSTEM_DATABASE: &str = "SQLite";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_materials: usize,
    pub total_menus: usize,
    pub recent_menus: Vec<Menu>,
    pub recent_materials: Vec<Material>,
}

pub fn summarize(materials: Vec<Material>, menus: Vec<Menu>) -> DashboardStats {
    DashboardStats {
        total_materials: materials.len(),
        total_menus: menus.len(),
        recent_menus: menus.into_iter().take(RECENT_COUNT).collect(),
        recent_materials: materials.into_iter().take(RECENT_COUNT).collect(),
    }
}

/// Combine both fetch results; either failure yields empty stats.
pub fn settle(materials: Result<Vec<Material>, ApiError>, menus: Result<Vec<Menu>, ApiError>) -> DashboardStats {
    match (materials, menus) {
        (Ok(materials), Ok(menus)) => summarize(materials, menus),
        (Err(e), _) | (_, Err(e)) => {
            leptos::logging::warn!("dashboard fetch failed: {e}");
            DashboardStats::default()
        }
    }
}

pub fn menu_summary(menu: &Menu) -> String {
    format!(
        "Price: {} | Updated: {}",
        format_yen(menu.selling_price),
        format_date(menu.last_updated.as_deref())
    )
}

pub fn material_summary(material: &Material) -> String {
    format!(
        "Unit price: {}/{} | Updated: {}",
        format_yen(material.unit_price),
        material.unit,
        format_date(material.last_updated.as_deref())
    )
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<api::ApiClient>();
    let stats = RwSignal::new(None::<DashboardStats>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let query = api::ListQuery::new().with("limit", FETCH_LIMIT);
        let (materials, menus) = futures::join!(
            api::materials::list_materials(&client, &query),
            api::menus::list_menus(&client, &query),
        );
        stats.set(Some(settle(materials, menus)));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
    }

    move || match stats.get() {
        None => view! { <div class="page-loading">"Loading..."</div> }.into_any(),
        Some(stats) => view! { <DashboardView stats/> }.into_any(),
    }
}

#[component]
fn DashboardView(stats: DashboardStats) -> impl IntoView {
    let menus = stats.recent_menus.iter().map(|m| (m.name.clone(), menu_summary(m))).collect::<Vec<_>>();
    let materials = stats
        .recent_materials
        .iter()
        .map(|m| (m.name.clone(), material_summary(m)))
        .collect::<Vec<_>>();

    view! {
        <div class="page dashboard">
            <div class="page-header">
                <h2 class="page-title">"Dashboard"</h2>
                <p>"Welcome to the menu management system. Review the system overview and latest updates."</p>
            </div>
            <div class="stat-grid">
                <StatCard title="Registered materials" value=stats.total_materials.to_string() icon="🛒"/>
                <StatCard title="Registered menus" value=stats.total_menus.to_string() icon="☰"/>
                <StatCard title="Total stores" value=STORE_COUNT.to_string() icon="👤"/>
                <StatCard title="Operating status" value=STATUS_TEXT.to_owned() icon="🏆"/>
            </div>
            <div class="recent-grid">
                <RecentList title="Recently updated menus" items=menus empty_text=NO_MENUS/>
                <RecentList title="Recently updated materials" items=materials empty_text=NO_MATERIALS/>
            </div>
            <section class="card system-info">
                <h3 class="card__title">"System information"</h3>
                <div><strong>"Version: "</strong>{SYSTEM_VERSION}</div>
                <div><strong>"Database: "</strong>{SYSTEM_DATABASE}</div>
                <div><strong>"Supported stores: "</strong>{format!("{STORE_COUNT} stores")}</div>
            </section>
        </div>
    }
}

#[component]
fn StatCard(title: &'static str, value: String, icon: &'static str) -> impl IntoView {
    view! {
        <section class="card stat-card">
            <div class="stat-card__title">{title}</div>
            <div class="stat-card__value">
                <span class="stat-card__icon">{icon}</span>
                {value}
            </div>
        </section>
    }
}

#[component]
fn RecentList(title: &'static str, items: Vec<(String, String)>, empty_text: &'static str) -> impl IntoView {
    let body = if items.is_empty() {
        view! { <div class="recent-list__empty">{empty_text}</div> }.into_any()
    } else {
        items
            .into_iter()
            .map(|(name, detail)| {
                view! {
                    <li class="recent-list__item">
                        <div class="recent-list__name">{name}</div>
                        <div class="recent-list__detail">{detail}</div>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };
    view! {
        <section class="card recent-list">
            <h3 class="card__title">{title}</h3>
            <ul class="recent-list__items">{body}</ul>
        </section>
    }
}
