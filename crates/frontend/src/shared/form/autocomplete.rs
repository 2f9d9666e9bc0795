use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Text input with a suggestion dropdown. Free text is committed through
/// the `Create "..."` row, so arbitrary values stay allowed.
#[component]
pub fn AutocompleteInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] suggestions: Signal<Vec<String>>,
    on_commit: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let draft = RwSignal::new(value.get_untracked());
    let open = RwSignal::new(false);

    // Keep the draft in step with commits made outside the input.
    Effect::new(move |_| {
        let committed = value.get();
        if !open.get_untracked() {
            draft.set(committed);
        }
    });

    let filtered = Signal::derive(move || {
        let needle = draft.get().to_lowercase();
        suggestions
            .get()
            .into_iter()
            .filter(|s| s.to_lowercase().contains(&needle))
            .collect::<Vec<String>>()
    });

    let has_exact = Signal::derive(move || {
        let text = draft.get();
        suggestions.get().iter().any(|s| s == &text)
    });

    let commit = move |text: String| {
        draft.set(text.clone());
        open.set(false);
        on_commit.run(text);
    };

    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="autocomplete">
            <input
                id=input_id
                class="form__input"
                type="text"
                prop:value=move || draft.get()
                placeholder=input_placeholder
                disabled=disabled
                autocomplete="off"
                on:focus=move |_| open.set(true)
                on:input=move |ev| {
                    draft.set(event_target_value(&ev));
                    open.set(true);
                }
                // Grace delay so a click on a suggestion lands before close.
                on:blur=move |_| {
                    spawn_local(async move {
                        TimeoutFuture::new(200).await;
                        if open.get_untracked() {
                            open.set(false);
                            on_commit.run(draft.get_untracked());
                        }
                    });
                }
            />
            <Show when=move || open.get() && !disabled>
                <div class="autocomplete__menu">
                    {move || {
                        filtered
                            .get()
                            .into_iter()
                            .map(|suggestion| {
                                let text = suggestion.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="autocomplete__item"
                                        on:mousedown=move |_| commit(text.clone())
                                    >
                                        {suggestion}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                    <Show when=move || !draft.get().trim().is_empty() && !has_exact.get()>
                        <button
                            type="button"
                            class="autocomplete__item autocomplete__item--create"
                            on:mousedown=move |_| commit(draft.get_untracked())
                        >
                            {move || format!("Create \"{}\"", draft.get())}
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
