use leptos::prelude::*;

use crate::shared::choice::ChoiceOption;

/// Mutually exclusive option group.
#[component]
pub fn RadioGroupInput(
    /// Shared `name` attribute tying the radios together.
    #[prop(into)]
    name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    options: Vec<ChoiceOption>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__radio-group">
            {options
                .into_iter()
                .map(|option| {
                    let option_value = option.value.clone();
                    let commit_value = option.value.clone();
                    let input_id = format!("{}-{}", name, option.value);
                    let label_id = input_id.clone();
                    view! {
                        <label class="form__radio" for=input_id>
                            <input
                                id=label_id
                                type="radio"
                                name=name.clone()
                                value=option.value.clone()
                                disabled=disabled
                                prop:checked=move || value.get() == option_value
                                on:change=move |_| {
                                    if let Some(handler) = on_change {
                                        handler.run(commit_value.clone());
                                    }
                                }
                            />
                            <span>{option.label}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
