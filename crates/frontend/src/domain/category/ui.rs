use contracts::domain::category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::shared::choice::ChoiceOption;
use crate::shared::components::action_buttons::{DeleteButton, EditButton};
use crate::shared::components::card::Card;
use crate::shared::components::drawer::Drawer;
use crate::shared::components::toast::use_toast;
use crate::shared::components::ui::{Button, SubmitButton};
use crate::shared::form::{FieldConfig, FieldKind, FormFields, FormState, Rules};
use crate::shared::page_config::PageConfig;
use crate::shared::query::use_paged_query;
use crate::shared::table::{CellValue, Column, DataTable, FilterOption};
use crate::system::auth::session::use_auth;

use super::api;

fn category_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("name", "Category Name", FieldKind::Text)
            .placeholder("e.g. Antibiotics")
            .rules(Rules::new().required("Name is required")),
        FieldConfig::new("description", "Description", FieldKind::Textarea)
            .placeholder("Optional notes"),
        FieldConfig::new("status", "Active", FieldKind::Switch),
    ]
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let session = use_auth();
    let toast = use_toast();

    let config = RwSignal::new(PageConfig::default());
    let query = use_paged_query(config, move |cfg: PageConfig| async move {
        api::list_categories(&cfg, session.token_value().as_deref()).await
    });

    let rows = Signal::derive(move || {
        query
            .state
            .get()
            .data
            .map(|list| list.data)
            .unwrap_or_default()
    });
    let total = Signal::derive(move || query.state.get().data.map(|l| l.total).unwrap_or(0));
    let loading = Signal::derive(move || query.state.get().is_loading);
    let load_error = Signal::derive(move || query.state.get().error);

    let filter_options = Signal::derive(move || {
        vec![FilterOption::new(
            "status",
            "Status",
            vec![
                ChoiceOption::new("Active", "true"),
                ChoiceOption::new("Inactive", "false"),
            ],
        )
        .single()]
    });

    let drawer_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Category>::None);
    let form = FormState::new(json!({ "status": true }));

    let open_create = move |_| {
        form.values.set(json!({ "status": true }));
        form.clear_errors();
        editing.set(None);
        drawer_open.set(true);
    };

    let open_edit = move |category: Category| {
        form.values.set(json!({
            "name": category.name,
            "description": category.description,
            "status": category.status,
        }));
        form.clear_errors();
        editing.set(Some(category));
        drawer_open.set(true);
    };

    let submit = move || {
        if !form.validate(&category_fields()) {
            return;
        }
        let payload = form.values.get_untracked();
        let is_edit = editing.get_untracked().is_some();
        form.submitting.set(true);
        spawn_local(async move {
            let token = session.token_value();
            let result = match editing.get_untracked() {
                Some(category) => {
                    api::update_category(category.id, &payload, token.as_deref()).await
                }
                None => api::create_category(&payload, token.as_deref()).await,
            };
            match result {
                Ok(_) => {
                    toast.success(if is_edit {
                        "Category updated successfully"
                    } else {
                        "Category created successfully"
                    });
                    drawer_open.set(false);
                    query.refetch();
                }
                Err(e) => {
                    log::warn!("category save failed: {}", e);
                    toast.error("Failed to save category");
                }
            }
            form.submitting.set(false);
        });
    };

    let on_delete = move |id: i64| {
        spawn_local(async move {
            match api::delete_category(id, session.token_value().as_deref()).await {
                Ok(()) => {
                    toast.success("Category deleted successfully");
                    query.refetch();
                }
                Err(e) => {
                    log::warn!("category delete failed: {}", e);
                    toast.error("Failed to delete category");
                }
            }
        });
    };

    let columns = vec![
        Column::new("id", "ID").data_index("id"),
        Column::new("name", "Category Name").data_index("name"),
        Column::new("description", "Description").data_index("description"),
        Column::new("status", "Status").render(|c: &Category| {
            let active = c.status;
            CellValue::view(move || {
                let class = if active {
                    "badge badge--success"
                } else {
                    "badge badge--danger"
                };
                view! { <span class=class>{if active { "Active" } else { "Inactive" }}</span> }
                    .into_any()
            })
        }),
        Column::new("createdAt", "Created At").data_index("createdAt"),
        Column::new("actions", "Actions").render(move |c: &Category| {
            let id = c.id;
            let category = c.clone();
            CellValue::view(move || {
                let category = category.clone();
                view! {
                    <div class="table__actions">
                        <EditButton
                            permission="update-category"
                            on_click=Callback::new(move |_| open_edit(category.clone()))
                        />
                        <DeleteButton
                            permission="delete-category"
                            on_click=Callback::new(move |_| on_delete(id))
                        />
                    </div>
                }
                .into_any()
            })
        }),
    ];

    view! {
        <Card
            title="Category List"
            action=view! {
                <Button on_click=Callback::new(open_create)>"Create Category"</Button>
            }
                .into_any()
        >
            <Drawer
                open=drawer_open
                title=Signal::derive(move || {
                    if editing.get().is_some() {
                        "Edit Category".to_string()
                    } else {
                        "Create Category".to_string()
                    }
                })
                description="Add a new medicine category"
            >
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }>
                    <FormFields state=form fields=category_fields() />
                    <SubmitButton label="Save Category" is_loading=form.submitting />
                </form>
            </Drawer>

            {move || {
                load_error
                    .get()
                    .map(|message| view! { <p class="load-error">{message}</p> })
            }}

            <DataTable
                title="Categories"
                columns=columns.clone()
                rows=rows
                total=total
                loading=loading
                config=config
                filter_options=filter_options
                action_permission=vec![
                    "update-category".to_string(),
                    "delete-category".to_string(),
                ]
            />
        </Card>
    }
}
