//! Table toolbar: staged search, filter manager, column toggle, exports.

use leptos::prelude::*;

use super::column_toggle::ColumnToggle;
use super::filter::{FilterManager, FilterOption};
use crate::shared::page_config::{dispatch, PageConfig, PageConfigPatch};

#[component]
pub fn TableToolbar(
    #[prop(into)] title: String,
    config: RwSignal<PageConfig>,
    columns: Vec<(String, String)>,
    visible: RwSignal<Vec<String>>,
    #[prop(into)] filter_options: Signal<Vec<FilterOption>>,
    on_export_csv: Callback<()>,
    on_export_pdf: Callback<()>,
) -> impl IntoView {
    // Search text is staged locally; only Enter or the search button commit
    // it. Clearing the box is committed immediately.
    let staged = RwSignal::new(String::new());

    let commit_search = move || {
        let value = staged.get_untracked();
        if !value.is_empty() {
            dispatch(config, PageConfigPatch::Search(value));
        }
    };

    view! {
        <div class="table-toolbar">
            <div class="table-toolbar__left">
                <div class="table-toolbar__search">
                    <input
                        type="text"
                        class="form__input"
                        placeholder=format!("Search {}...", title)
                        prop:value=move || staged.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            let cleared = value.is_empty();
                            staged.set(value);
                            if cleared {
                                dispatch(config, PageConfigPatch::ClearSearch);
                            }
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                commit_search();
                            }
                        }
                    />
                    <button
                        type="button"
                        class="table-toolbar__search-btn"
                        title="Search"
                        on:click=move |_| commit_search()
                    >
                        "\u{1f50d}"
                    </button>
                </div>
                <Show when=move || !filter_options.get().is_empty()>
                    <FilterManager filter_options=filter_options config=config />
                </Show>
                <ColumnToggle columns=columns.clone() visible=visible />
            </div>
            <div class="table-toolbar__right">
                <button
                    type="button"
                    class="btn btn--outline"
                    on:click=move |_| on_export_pdf.run(())
                >
                    "Print PDF"
                </button>
                <button
                    type="button"
                    class="btn btn--outline"
                    on:click=move |_| on_export_csv.run(())
                >
                    "Download CSV"
                </button>
            </div>
        </div>
    }
}
