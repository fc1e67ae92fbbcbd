//! Material list page.

#[cfg(test)]
#[path = "materials_test.rs"]
mod materials_test;

use api::{Material, Notice, Notifier};
use leptos::prelude::*;

use crate::components::data_table::{Column, DataTable};
use crate::state::notice::{NoticeState, SignalNotifier};
use crate::util::format::{format_quantity, format_yen};

pub const EMPTY_TEXT: &str = "No materials registered";
pub const DEMO_DATA_NOTICE: &str = "Showing demo data";

pub fn material_columns() -> Vec<Column<Material>> {
    vec![
        Column { title: "Name", cell: |m| m.name.clone() },
        Column { title: "Category", cell: |m| m.category.clone() },
        Column { title: "Unit", cell: |m| m.unit.clone() },
        Column { title: "Unit price", cell: |m| format_yen(m.unit_price) },
        Column { title: "Current stock", cell: |m| format_quantity(m.current_stock) },
        Column { title: "Minimum stock", cell: |m| format_quantity(m.minimum_stock) },
        Column { title: "Supplier", cell: |m| m.supplier.clone().unwrap_or_else(|| "-".to_owned()) },
    ]
}

#[component]
pub fn MaterialListPage() -> impl IntoView {
    let client = expect_context::<api::ApiClient>();
    let config = expect_context::<api::ApiConfig>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let rows = RwSignal::new(None::<Vec<Material>>);

    if config.use_mock_data {
        SignalNotifier::new(notices).notify(Notice::info(DEMO_DATA_NOTICE));
    }

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = api::materials::list_materials(&client, &api::ListQuery::new()).await;
        rows.set(Some(crate::pages::rows_or_empty("materials", result)));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
    }

    view! {
        <div class="page">
            <div class="page-header page-header--actions">
                <h2 class="page-title">"Materials"</h2>
                <button class="button button--primary" type="button">"+ Add material"</button>
            </div>
            <DataTable columns=material_columns() rows=rows empty_text=EMPTY_TEXT with_actions=true/>
        </div>
    }
}
