use std::collections::BTreeMap;

use contracts::system::roles::{Permission, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::shared::components::action_buttons::{DeleteButton, EditButton};
use crate::shared::components::card::Card;
use crate::shared::components::drawer::Drawer;
use crate::shared::components::toast::use_toast;
use crate::shared::components::ui::{Button, CheckboxInput, SubmitButton};
use crate::shared::form::{FieldConfig, FieldKind, FormFields, FormState, Rules};
use crate::shared::page_config::PageConfig;
use crate::shared::query::use_paged_query;
use crate::shared::table::{CellValue, Column, DataTable};
use crate::system::auth::{api as auth_api, session::use_auth};

use super::api;

fn role_fields(is_edit: bool) -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("name", "Role Name", FieldKind::Text)
            .placeholder("Enter role name")
            .rules(Rules::new().required("Role name is required"))
            .disabled(is_edit),
        FieldConfig::new("description", "Description", FieldKind::Textarea)
            .placeholder("What this role is for"),
    ]
}

fn grouped(catalog: &[Permission]) -> BTreeMap<String, Vec<Permission>> {
    let mut groups: BTreeMap<String, Vec<Permission>> = BTreeMap::new();
    for permission in catalog {
        groups
            .entry(
                permission
                    .group
                    .clone()
                    .unwrap_or_else(|| "other".to_string()),
            )
            .or_default()
            .push(permission.clone());
    }
    groups
}

#[component]
pub fn RolesPage() -> impl IntoView {
    let session = use_auth();
    let toast = use_toast();

    let config = RwSignal::new(PageConfig::default());
    let query = use_paged_query(config, move |cfg: PageConfig| async move {
        api::list_roles(&cfg, session.token_value().as_deref()).await
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

    let catalog = RwSignal::new(Vec::<Permission>::new());
    Effect::new(move |_| {
        let token = session.token.get();
        spawn_local(async move {
            let Some(token) = token else { return };
            match auth_api::fetch_permission_catalog(&token).await {
                Ok(list) => catalog.set(list),
                Err(e) => log::warn!("failed to load permission catalog: {}", e),
            }
        });
    });

    let drawer_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Role>::None);
    let selected_ids = RwSignal::new(Vec::<i64>::new());
    let form = FormState::new(json!({}));

    let open_create = move |_| {
        form.values.set(json!({}));
        form.clear_errors();
        selected_ids.set(Vec::new());
        editing.set(None);
        drawer_open.set(true);
    };

    let open_edit = move |role: Role| {
        form.values.set(json!({
            "name": role.name,
            "description": role.description,
        }));
        form.clear_errors();
        // The role carries permission names; the checklist works in ids.
        let ids = catalog
            .get_untracked()
            .iter()
            .filter(|p| role.permissions.contains(&p.name))
            .map(|p| p.id)
            .collect::<Vec<_>>();
        selected_ids.set(ids);
        editing.set(Some(role));
        drawer_open.set(true);
    };

    let submit = move || {
        let is_edit = editing.get_untracked().is_some();
        if !form.validate(&role_fields(is_edit)) {
            return;
        }
        form.submitting.set(true);
        spawn_local(async move {
            let token = session.token_value();
            let ids = selected_ids.get_untracked();
            let result = match editing.get_untracked() {
                Some(role) => {
                    api::update_role_permissions(role.id, &ids, token.as_deref()).await
                }
                None => {
                    let mut payload = form.values.get_untracked();
                    payload["permissionId"] = json!(ids);
                    api::create_role(&payload, token.as_deref()).await
                }
            };
            match result {
                Ok(_) => {
                    toast.success(if is_edit {
                        "Role updated successfully"
                    } else {
                        "Role created successfully"
                    });
                    drawer_open.set(false);
                    query.refetch();
                }
                Err(e) => {
                    log::warn!("role save failed: {}", e);
                    toast.error("Failed to save role");
                }
            }
            form.submitting.set(false);
        });
    };

    let on_delete = move |id: i64| {
        spawn_local(async move {
            match api::delete_role(id, session.token_value().as_deref()).await {
                Ok(()) => {
                    toast.success("Role deleted successfully");
                    query.refetch();
                }
                Err(e) => {
                    log::warn!("role delete failed: {}", e);
                    toast.error("Failed to delete role");
                }
            }
        });
    };

    let toggle_permission = move |id: i64| {
        selected_ids.update(|ids| {
            if let Some(pos) = ids.iter().position(|&p| p == id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        });
    };

    let columns = vec![
        Column::new("id", "ID").data_index("id"),
        Column::new("name", "Name").data_index("name"),
        Column::new("permissions", "Permissions").render(|r: &Role| {
            CellValue::Number(r.permissions.len() as f64)
        }),
        Column::new("createdAt", "Created At").data_index("createdAt"),
        Column::new("actions", "Actions").render(move |r: &Role| {
            let id = r.id;
            let role = r.clone();
            CellValue::view(move || {
                let role = role.clone();
                view! {
                    <div class="table__actions">
                        <EditButton
                            permission="update-role"
                            on_click=Callback::new(move |_| open_edit(role.clone()))
                        />
                        <DeleteButton
                            permission="delete-role"
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
            title="Role & Permissions"
            action=view! { <Button on_click=Callback::new(open_create)>"Create Role"</Button> }
                .into_any()
        >
            <Drawer
                open=drawer_open
                title=Signal::derive(move || {
                    if editing.get().is_some() {
                        "Edit Role".to_string()
                    } else {
                        "Create New Role".to_string()
                    }
                })
                description="Name the role and pick its permissions."
            >
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }>
                    <FormFields state=form fields=role_fields(editing.get().is_some()) />

                    <div class="permission-checklist">
                        {move || {
                            grouped(&catalog.get())
                                .into_iter()
                                .map(|(group, permissions)| {
                                    view! {
                                        <fieldset class="permission-checklist__group">
                                            <legend>{group}</legend>
                                            {permissions
                                                .into_iter()
                                                .map(|permission| {
                                                    let id = permission.id;
                                                    let checked = Signal::derive(move || {
                                                        selected_ids.get().contains(&id)
                                                    });
                                                    view! {
                                                        <CheckboxInput
                                                            checked=checked
                                                            label=permission.name.clone()
                                                            on_change=Callback::new(move |_| {
                                                                toggle_permission(id)
                                                            })
                                                        />
                                                    }
                                                })
                                                .collect_view()}
                                        </fieldset>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <SubmitButton label="Save Role" is_loading=form.submitting />
                </form>
            </Drawer>

            {move || {
                load_error
                    .get()
                    .map(|message| view! { <p class="load-error">{message}</p> })
            }}

            <DataTable
                title="Roles"
                columns=columns.clone()
                rows=rows
                total=total
                loading=loading
                config=config
                action_permission=vec!["update-role".to_string(), "delete-role".to_string()]
            />
        </Card>
    }
}
