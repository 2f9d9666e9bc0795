use leptos::prelude::*;

/// Right-hand sheet hosting the create/edit forms.
///
/// Closing discards nothing: the owner keeps the open flag, so a failed
/// mutation can leave the drawer open with the form still populated.
#[component]
pub fn Drawer(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] description: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {

    view! {
        <Show when=move || open.get()>
            <div class="drawer-overlay" on:click=move |_| open.set(false)></div>
            <div class="drawer drawer--right">
                <div class="drawer__header">
                    <h3 class="drawer__title">{move || title.get()}</h3>
                    <button
                        type="button"
                        class="drawer__close"
                        on:click=move |_| open.set(false)
                    >
                        "\u{00d7}"
                    </button>
                </div>
                {move || description.get().map(|d| view! { <p class="drawer__description">{d}</p> })}
                <div class="drawer__body">{children()}</div>
            </div>
        </Show>
    }
}
