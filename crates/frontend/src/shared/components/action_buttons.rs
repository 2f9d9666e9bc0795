use leptos::prelude::*;

use crate::system::auth::session::use_auth;

/// Row-level edit button, rendered only when the session holds `permission`.
#[component]
pub fn EditButton(
    #[prop(into)] permission: String,
    on_click: Callback<()>,
) -> impl IntoView {
    let session = use_auth();

    view! {
        <Show when=move || session.has_permission(&permission)>
            <button
                type="button"
                class="btn btn--icon"
                title="Edit"
                on:click=move |_| on_click.run(())
            >
                "Edit"
            </button>
        </Show>
    }
}

/// Row-level delete button, rendered only when the session holds `permission`.
#[component]
pub fn DeleteButton(
    #[prop(into)] permission: String,
    on_click: Callback<()>,
) -> impl IntoView {
    let session = use_auth();

    view! {
        <Show when=move || session.has_permission(&permission)>
            <button
                type="button"
                class="btn btn--icon btn--danger"
                title="Delete"
                on:click=move |_| on_click.run(())
            >
                "Delete"
            </button>
        </Show>
    }
}
