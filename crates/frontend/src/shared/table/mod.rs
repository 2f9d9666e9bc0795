//! Generic data table: declarative columns over a page of rows, with
//! toolbar, filtering, column visibility, export and pagination.

mod column;
mod column_toggle;
mod filter;
mod pagination;
mod toolbar;

pub use column::{
    displayed_columns, exportable_columns, format_number, resolve_display, resolve_export,
    CellValue, Column,
};
pub use filter::{FilterMode, FilterOption};
pub use pagination::{page_window, total_pages, TablePagination};

use leptos::prelude::*;
use serde_json::Value;

use crate::shared::date_format::today_display;
use crate::shared::export::{build_csv, download_text, download_bytes, export_filename};
use crate::shared::page_config::PageConfig;
use crate::shared::pdf::build_table_pdf;
use crate::system::auth::session::use_auth;

use toolbar::TableToolbar;

#[component]
pub fn DataTable<T>(
    #[prop(into)] title: String,
    columns: Vec<Column<T>>,
    #[prop(into)] rows: Signal<Vec<T>>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] loading: Signal<bool>,
    config: RwSignal<PageConfig>,
    #[prop(optional, into)] filter_options: Signal<Vec<FilterOption>>,
    /// Permissions gating the `actions` column; any match shows it.
    #[prop(optional)]
    action_permission: Vec<String>,
) -> impl IntoView
where
    T: Clone + serde::Serialize + Send + Sync + 'static,
{
    let session = use_auth();

    let columns_meta: Vec<(String, String)> = columns
        .iter()
        .map(|c| (c.key.clone(), c.title.clone()))
        .collect();
    let visible = RwSignal::new(
        columns.iter().map(|c| c.key.clone()).collect::<Vec<String>>(),
    );
    let columns = StoredValue::new(columns);
    let action_permission = StoredValue::new(action_permission);
    let title = StoredValue::new(title);

    let displayed = move || -> Vec<Column<T>> {
        let visible_keys = visible.get();
        let permissions = session.permissions.get();
        columns.with_value(|cols| {
            action_permission
                .with_value(|required| displayed_columns(cols, &visible_keys, required, &permissions))
        })
    };

    let exportable = move || -> Vec<Column<T>> {
        let visible_keys = visible.get_untracked();
        columns.with_value(|cols| exportable_columns(cols, &visible_keys))
    };

    let export_rows = move |cols: &[Column<T>]| -> Vec<Vec<String>> {
        rows.get_untracked()
            .iter()
            .map(|row| {
                let json = serde_json::to_value(row).unwrap_or(Value::Null);
                cols.iter().map(|c| resolve_export(c, row, &json)).collect()
            })
            .collect()
    };

    let on_export_csv = Callback::new(move |_| {
        if rows.get_untracked().is_empty() {
            return;
        }
        let cols = exportable();
        let headers: Vec<String> = cols.iter().map(|c| c.title.clone()).collect();
        let csv = build_csv(&headers, &export_rows(&cols));
        let filename = export_filename(&title.get_value(), "csv");
        if let Err(e) = download_text(&csv, "text/csv;charset=utf-8;", &filename) {
            log::warn!("CSV export failed: {}", e);
        }
    });

    let on_export_pdf = Callback::new(move |_| {
        if rows.get_untracked().is_empty() {
            return;
        }
        let cols = exportable();
        let headers: Vec<String> = cols.iter().map(|c| c.title.clone()).collect();
        let bytes = build_table_pdf(
            &title.get_value(),
            &today_display(),
            &headers,
            &export_rows(&cols),
        );
        let filename = export_filename(&title.get_value(), "pdf");
        if let Err(e) = download_bytes(&bytes, "application/pdf", &filename) {
            log::warn!("PDF export failed: {}", e);
        }
    });

    view! {
        <div class="data-table">
            <TableToolbar
                title=title.get_value()
                config=config
                columns=columns_meta
                visible=visible
                filter_options=filter_options
                on_export_csv=on_export_csv
                on_export_pdf=on_export_pdf
            />

            <div class="data-table__scroll">
                <table class="table">
                    <thead>
                        <tr>
                            {move || {
                                displayed()
                                    .into_iter()
                                    .map(|col| {
                                        view! {
                                            <th class=col.th_class.unwrap_or_default()>
                                                {col.title}
                                            </th>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let cols = displayed();
                            if loading.get() {
                                (0..5)
                                    .map(|_| {
                                        view! {
                                            <tr class="table__row">
                                                {(0..cols.len())
                                                    .map(|_| view! {
                                                        <td><div class="skeleton"></div></td>
                                                    })
                                                    .collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            } else {
                                let list = rows.get();
                                if list.is_empty() {
                                    view! {
                                        <tr>
                                            <td
                                                colspan=cols.len().to_string()
                                                class="table__empty"
                                            >
                                                "No results found"
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    list.into_iter()
                                        .map(|row| {
                                            let json = serde_json::to_value(&row)
                                                .unwrap_or(Value::Null);
                                            view! {
                                                <tr class="table__row">
                                                    {cols
                                                        .iter()
                                                        .map(|col| {
                                                            let cell = resolve_display(col, &row, &json);
                                                            view! {
                                                                <td class=col
                                                                    .td_class
                                                                    .clone()
                                                                    .unwrap_or_default()>
                                                                    {cell_view(cell)}
                                                                </td>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <TablePagination total=total config=config />
        </div>
    }
}

fn cell_view(cell: CellValue) -> AnyView {
    match cell {
        CellValue::Text(text) => text.into_any(),
        CellValue::Number(n) => format_number(n).into_any(),
        CellValue::View(render) => render(),
        CellValue::Empty => "-".into_any(),
    }
}
