use contracts::domain::supplier::Supplier;
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

fn supplier_fields(contact_suggestions: Signal<Vec<String>>) -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("name", "Supplier Name", FieldKind::Text)
            .placeholder("e.g. Beximco Pharma")
            .rules(Rules::new().required("Name is required")),
        FieldConfig::new(
            "contactPerson",
            "Contact Person",
            FieldKind::Autocomplete {
                suggestions: contact_suggestions,
            },
        )
        .placeholder("Start typing a name"),
        FieldConfig::new("phone", "Phone", FieldKind::Text)
            .placeholder("01700000000")
            .half_width(),
        FieldConfig::new("email", "Email", FieldKind::Email)
            .placeholder("supplier@example.com")
            .rules(Rules::new().email("Invalid email"))
            .half_width(),
        FieldConfig::new("address", "Address", FieldKind::Textarea)
            .placeholder("Street, city"),
        FieldConfig::new("status", "Active", FieldKind::Switch),
    ]
}

#[component]
pub fn SuppliersPage() -> impl IntoView {
    let session = use_auth();
    let toast = use_toast();

    let config = RwSignal::new(PageConfig::default());
    let query = use_paged_query(config, move |cfg: PageConfig| async move {
        api::list_suppliers(&cfg, session.token_value().as_deref()).await
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

    // Known contact people feed the autocomplete; new names stay allowed.
    let contact_suggestions = Signal::derive(move || {
        let mut names = rows
            .get()
            .iter()
            .filter_map(|s| s.contact_person.clone())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>();
        names.sort();
        names.dedup();
        names
    });

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
    let editing = RwSignal::new(Option::<Supplier>::None);
    let form = FormState::new(json!({ "status": true }));

    let open_create = move |_| {
        form.values.set(json!({ "status": true }));
        form.clear_errors();
        editing.set(None);
        drawer_open.set(true);
    };

    let open_edit = move |supplier: Supplier| {
        form.values.set(json!({
            "name": supplier.name,
            "contactPerson": supplier.contact_person,
            "phone": supplier.phone,
            "email": supplier.email,
            "address": supplier.address,
            "status": supplier.status,
        }));
        form.clear_errors();
        editing.set(Some(supplier));
        drawer_open.set(true);
    };

    let submit = move || {
        if !form.validate(&supplier_fields(contact_suggestions)) {
            return;
        }
        let payload = form.values.get_untracked();
        let is_edit = editing.get_untracked().is_some();
        form.submitting.set(true);
        spawn_local(async move {
            let token = session.token_value();
            let result = match editing.get_untracked() {
                Some(supplier) => {
                    api::update_supplier(supplier.id, &payload, token.as_deref()).await
                }
                None => api::create_supplier(&payload, token.as_deref()).await,
            };
            match result {
                Ok(_) => {
                    toast.success(if is_edit {
                        "Supplier updated successfully"
                    } else {
                        "Supplier created successfully"
                    });
                    drawer_open.set(false);
                    query.refetch();
                }
                Err(e) => {
                    log::warn!("supplier save failed: {}", e);
                    toast.error("Failed to save supplier");
                }
            }
            form.submitting.set(false);
        });
    };

    let on_delete = move |id: i64| {
        spawn_local(async move {
            match api::delete_supplier(id, session.token_value().as_deref()).await {
                Ok(()) => {
                    toast.success("Supplier deleted successfully");
                    query.refetch();
                }
                Err(e) => {
                    log::warn!("supplier delete failed: {}", e);
                    toast.error("Failed to delete supplier");
                }
            }
        });
    };

    let columns = vec![
        Column::new("id", "ID").data_index("id"),
        Column::new("name", "Supplier Name").data_index("name"),
        Column::new("contactPerson", "Contact Person").data_index("contactPerson"),
        Column::new("phone", "Phone").data_index("phone"),
        Column::new("email", "Email").data_index("email"),
        Column::new("status", "Status").render(|s: &Supplier| {
            let active = s.status;
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
        Column::new("actions", "Actions").render(move |s: &Supplier| {
            let id = s.id;
            let supplier = s.clone();
            CellValue::view(move || {
                let supplier = supplier.clone();
                view! {
                    <div class="table__actions">
                        <EditButton
                            permission="update-supplier"
                            on_click=Callback::new(move |_| open_edit(supplier.clone()))
                        />
                        <DeleteButton
                            permission="delete-supplier"
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
            title="Supplier List"
            action=view! {
                <Button on_click=Callback::new(open_create)>"Create Supplier"</Button>
            }
                .into_any()
        >
            <Drawer
                open=drawer_open
                title=Signal::derive(move || {
                    if editing.get().is_some() {
                        "Edit Supplier".to_string()
                    } else {
                        "Create Supplier".to_string()
                    }
                })
                description="Suppliers provide the medicines you stock."
            >
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }>
                    <FormFields state=form fields=supplier_fields(contact_suggestions) />
                    <SubmitButton label="Save Supplier" is_loading=form.submitting />
                </form>
            </Drawer>

            {move || {
                load_error
                    .get()
                    .map(|message| view! { <p class="load-error">{message}</p> })
            }}

            <DataTable
                title="Suppliers"
                columns=columns.clone()
                rows=rows
                total=total
                loading=loading
                config=config
                filter_options=filter_options
                action_permission=vec![
                    "update-supplier".to_string(),
                    "delete-supplier".to_string(),
                ]
            />
        </Card>
    }
}
