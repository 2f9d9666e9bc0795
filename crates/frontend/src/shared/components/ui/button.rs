use leptos::prelude::*;

/// Plain action button.
#[component]
pub fn Button(
    #[prop(optional)] on_click: Option<Callback<()>>,
    /// Extra class, e.g. "btn--outline".
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || format!("btn {}", class.get().unwrap_or_default())
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Form submit button that disables itself and shows a busy label while a
/// mutation is in flight.
#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn btn--primary"
            disabled=move || is_loading.get()
        >
            {move || {
                if is_loading.get() {
                    "Saving...".to_string()
                } else {
                    label.clone()
                }
            }}
        </button>
    }
}
