use leptos::prelude::*;

use crate::shared::choice::ChoiceOption;

/// Single-choice dropdown. Emits the selected option's value.
#[component]
pub fn SelectInput(
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<ChoiceOption>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <select
                id=select_id
                class="form__select"
                disabled=disabled
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_else(|| "Select...".to_string())}
                </option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let option_value = option.value.clone();
                            view! {
                                <option
                                    value=option.value.clone()
                                    selected=move || value.get() == option_value
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
