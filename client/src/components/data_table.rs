//! Paged read-only table used by list pages.
//!
//! DESIGN
//! ======
//! Rows arrive as `Option<Vec<T>>`: `None` while the fetch is pending, an
//! empty vec for "nothing to show" (including failed fetches). Paging is
//! purely client-side.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use std::ops::Range;

use leptos::prelude::*;

pub const PAGE_SIZE: usize = 10;

/// A column title and the function rendering its cell text.
pub struct Column<T> {
    pub title: &'static str,
    pub cell: fn(&T) -> String,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

/// What the table body shows for the current rows.
#[derive(Debug, PartialEq, Eq)]
pub enum TableState<'a, T> {
    Loading,
    Empty(&'static str),
    Rows(&'a [T]),
}

pub fn table_state<'a, T>(rows: Option<&'a [T]>, empty_text: &'static str) -> TableState<'a, T> {
    match rows {
        None => TableState::Loading,
        Some([]) => TableState::Empty(empty_text),
        Some(list) => TableState::Rows(list),
    }
}

/// Number of pages needed for `len` rows; never zero.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Row indices shown on 1-based `page`, clamped to the last page.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let page = page.clamp(1, page_count(len, page_size));
    let start = (page - 1) * page_size;
    start.min(len)..(start + page_size).min(len)
}

#[component]
pub fn DataTable<T>(
    columns: Vec<Column<T>>,
    #[prop(into)] rows: Signal<Option<Vec<T>>>,
    empty_text: &'static str,
    /// Append inert Edit/Delete buttons to each row.
    #[prop(optional)]
    with_actions: bool,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let columns = StoredValue::new(columns);
    let page = RwSignal::new(1_usize);

    let header = move || {
        columns.with_value(|cols| {
            let titles = cols.iter().map(|c| view! { <th>{c.title}</th> }).collect_view();
            view! {
                <tr>
                    {titles}
                    <Show when=move || with_actions>
                        <th>"Actions"</th>
                    </Show>
                </tr>
            }
        })
    };

    move || {
        let current_rows = rows.get();
        match table_state(current_rows.as_deref(), empty_text) {
            TableState::Loading => view! { <div class="data-table__loading">"Loading..."</div> }.into_any(),
            TableState::Empty(text) => view! { <div class="data-table__empty">{text}</div> }.into_any(),
            TableState::Rows(list) => {
                let pages = page_count(list.len(), PAGE_SIZE);
                let current = page.get().clamp(1, pages);
                let body = list[page_range(list.len(), current, PAGE_SIZE)]
                    .iter()
                    .map(|row| {
                        let cells = columns
                            .with_value(|cols| cols.iter().map(|c| view! { <td>{(c.cell)(row)}</td> }).collect_view());
                        view! {
                            <tr>
                                {cells}
                                <Show when=move || with_actions>
                                    <td class="data-table__actions">
                                        <button class="data-table__action" type="button">"Edit"</button>
                                        <button class="data-table__action data-table__action--danger" type="button">
                                            "Delete"
                                        </button>
                                    </td>
                                </Show>
                            </tr>
                        }
                    })
                    .collect_view();
                let total = list.len();
                view! {
                    <div class="data-table">
                        <table class="data-table__table">
                            <thead>{header}</thead>
                            <tbody>{body}</tbody>
                        </table>
                        <div class="data-table__pager">
                            <span class="data-table__total">{format!("{total} items")}</span>
                            <button
                                type="button"
                                disabled=move || current <= 1
                                on:click=move |_| page.set(current.saturating_sub(1).max(1))
                            >
                                "‹"
                            </button>
                            <span class="data-table__page">{format!("{current} / {pages}")}</span>
                            <button
                                type="button"
                                disabled=move || current >= pages
                                on:click=move |_| page.set((current + 1).min(pages))
                            >
                                "›"
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            }
        }
    }
}
