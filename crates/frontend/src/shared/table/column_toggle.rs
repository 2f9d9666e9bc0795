//! Column visibility menu. Display order always follows the declared column
//! order; the visible set only says which keys show.

use leptos::prelude::*;

#[component]
pub fn ColumnToggle(
    /// (key, title) pairs for every declared column.
    columns: Vec<(String, String)>,
    visible: RwSignal<Vec<String>>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let columns = StoredValue::new(columns);

    let toggle = move |key: String| {
        visible.update(|keys| {
            if let Some(pos) = keys.iter().position(|k| *k == key) {
                keys.remove(pos);
            } else {
                keys.push(key);
            }
        });
    };

    view! {
        <div class="dropdown">
            <button
                type="button"
                class="btn btn--outline"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                "Columns \u{25be}"
            </button>
            <Show when=move || is_open.get()>
                <div class="dropdown__overlay" on:click=move |_| is_open.set(false)></div>
                <div class="dropdown__panel">
                    <div class="dropdown__heading">"Toggle Columns"</div>
                    {move || {
                        columns
                            .get_value()
                            .into_iter()
                            .map(|(key, title)| {
                                let check_key = key.clone();
                                let checked = move || visible.get().contains(&check_key);
                                view! {
                                    <div
                                        class="dropdown__item"
                                        on:click=move |_| toggle(key.clone())
                                    >
                                        <span class=move || {
                                            if checked() {
                                                "dropdown__check dropdown__check--on"
                                            } else {
                                                "dropdown__check"
                                            }
                                        }></span>
                                        {title}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
