use leptos::prelude::*;

/// Boolean toggle with its own inline label.
#[component]
pub fn CheckboxInput(
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <label class="form__checkbox" for=input_id>
            <input
                id=input_id
                type="checkbox"
                disabled=disabled
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span>{move || label.get().unwrap_or_default()}</span>
        </label>
    }
}
