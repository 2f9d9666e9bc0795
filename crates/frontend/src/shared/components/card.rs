use leptos::prelude::*;

/// Content card with a title row and an optional action slot.
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] action: Option<AnyView>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <div>
                    <h2 class="card__title">{title}</h2>
                    {move || subtitle.get().map(|s| view! { <p class="card__subtitle">{s}</p> })}
                </div>
                {action.map(|action| view! { <div class="card__action">{action}</div> })}
            </div>
            <div class="card__body">{children()}</div>
        </div>
    }
}
