use leptos::prelude::*;

/// Boolean toggle styled as a switch, label alongside.
#[component]
pub fn SwitchInput(
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__switch-row">
            <label class="form__switch" for=input_id>
                <input
                    id=input_id
                    type="checkbox"
                    role="switch"
                    disabled=disabled
                    prop:checked=move || checked.get()
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_checked(&ev));
                        }
                    }
                />
                <span class="form__switch-track"></span>
            </label>
            <label class="form__label form__label--inline" for=input_id>
                {move || label.get().unwrap_or_default()}
            </label>
        </div>
    }
}
