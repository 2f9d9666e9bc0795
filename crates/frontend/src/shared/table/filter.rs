//! Filter manager: removable chips with inline pickers plus a "+ Filter"
//! menu. Which chips are shown is tracked separately from which keys hold a
//! value, so a chip stays pinned even with an empty selection.

use leptos::prelude::*;

use crate::shared::choice::ChoiceOption;
use crate::shared::page_config::{dispatch, FilterValue, PageConfig, PageConfigPatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    Single,
    #[default]
    Multiple,
}

/// One filterable dimension offered by a list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    /// Matches a page-config filter key.
    pub key: String,
    pub label: String,
    pub mode: FilterMode,
    pub options: Vec<ChoiceOption>,
}

impl FilterOption {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            mode: FilterMode::Multiple,
            options,
        }
    }

    pub fn single(mut self) -> Self {
        self.mode = FilterMode::Single;
        self
    }
}

#[component]
pub fn FilterManager(
    #[prop(into)] filter_options: Signal<Vec<FilterOption>>,
    config: RwSignal<PageConfig>,
) -> impl IntoView {
    // Chips currently pinned in the toolbar.
    let active_keys = RwSignal::new(Vec::<String>::new());

    // Keys that already hold a value (e.g. restored state) get their chip
    // pinned as soon as the option list is known.
    Effect::new(move |_| {
        let options = filter_options.get();
        let current = config.get_untracked();
        active_keys.update(|keys| {
            for option in &options {
                if current.has_filter_value(&option.key) && !keys.contains(&option.key) {
                    keys.push(option.key.clone());
                }
            }
        });
    });

    let active = move || {
        let keys = active_keys.get();
        filter_options
            .get()
            .into_iter()
            .filter(|f| keys.contains(&f.key))
            .collect::<Vec<_>>()
    };
    let available = move || {
        let keys = active_keys.get();
        filter_options
            .get()
            .into_iter()
            .filter(|f| !keys.contains(&f.key))
            .collect::<Vec<_>>()
    };

    let add_menu_open = RwSignal::new(false);

    view! {
        <div class="filter-manager">
            {move || {
                active()
                    .into_iter()
                    .map(|filter| {
                        let key = filter.key.clone();
                        view! {
                            <div class="filter-chip">
                                <FilterSelect filter=filter config=config />
                                <button
                                    type="button"
                                    class="filter-chip__remove"
                                    on:click=move |_| {
                                        let key = key.clone();
                                        active_keys.update(|keys| keys.retain(|k| *k != key));
                                        dispatch(config, PageConfigPatch::RemoveFilter(key));
                                    }
                                >
                                    "\u{00d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <Show when=move || !available().is_empty()>
                <div class="dropdown">
                    <button
                        type="button"
                        class="btn btn--dashed"
                        on:click=move |_| add_menu_open.update(|open| *open = !*open)
                    >
                        "+ Filter"
                    </button>
                    <Show when=move || add_menu_open.get()>
                        <div class="dropdown__overlay" on:click=move |_| add_menu_open.set(false)></div>
                        <div class="dropdown__panel">
                            {move || {
                                available()
                                    .into_iter()
                                    .map(|filter| {
                                        let key = filter.key.clone();
                                        view! {
                                            <div
                                                class="dropdown__item"
                                                on:click=move |_| {
                                                    let key = key.clone();
                                                    active_keys.update(|keys| {
                                                        if !keys.contains(&key) {
                                                            keys.push(key.clone());
                                                        }
                                                    });
                                                    add_menu_open.set(false);
                                                }
                                            >
                                                {filter.label}
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Inline value picker inside a filter chip.
#[component]
fn FilterSelect(filter: FilterOption, config: RwSignal<PageConfig>) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let filter = StoredValue::new(filter);

    let display_text = move || {
        let f = filter.get_value();
        match config.get().filters.get(&f.key) {
            Some(value) if !matches!(value, FilterValue::Many(v) if v.is_empty()) => {
                value.summary(|v| {
                    f.options
                        .iter()
                        .find(|o| o.value == v)
                        .map(|o| o.label.clone())
                })
            }
            _ => f.label.clone(),
        }
    };

    let select_value = move |option_value: String| {
        let f = filter.get_value();
        match f.mode {
            FilterMode::Single => {
                dispatch(
                    config,
                    PageConfigPatch::SetFilter(f.key.clone(), FilterValue::Single(option_value)),
                );
                is_open.set(false);
            }
            FilterMode::Multiple => {
                let mut values = match config.get_untracked().filters.get(&f.key) {
                    Some(FilterValue::Many(vs)) => vs.clone(),
                    Some(FilterValue::Single(v)) => vec![v.clone()],
                    None => Vec::new(),
                };
                if let Some(pos) = values.iter().position(|v| *v == option_value) {
                    values.remove(pos);
                } else {
                    values.push(option_value);
                }
                dispatch(
                    config,
                    PageConfigPatch::SetFilter(f.key.clone(), FilterValue::Many(values)),
                );
                // Stay open for further toggling.
            }
        }
    };

    view! {
        <div class="filter-select">
            <button
                type="button"
                class="filter-select__trigger"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {display_text}
            </button>
            <Show when=move || is_open.get()>
                <div class="dropdown__overlay" on:click=move |_| is_open.set(false)></div>
                <div class="dropdown__panel">
                    {move || {
                        let f = filter.get_value();
                        f.options
                            .iter()
                            .map(|option| {
                                let option_value = option.value.clone();
                                let commit_value = option.value.clone();
                                let key = f.key.clone();
                                let selected = move || {
                                    config
                                        .get()
                                        .filters
                                        .get(&key)
                                        .is_some_and(|v| v.contains(&option_value))
                                };
                                view! {
                                    <div
                                        class="dropdown__item"
                                        on:click=move |_| select_value(commit_value.clone())
                                    >
                                        <span class=move || {
                                            if selected() {
                                                "dropdown__check dropdown__check--on"
                                            } else {
                                                "dropdown__check"
                                            }
                                        }></span>
                                        {option.label.clone()}
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
