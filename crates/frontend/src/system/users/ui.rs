use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Value};

use crate::shared::choice::ChoiceOption;
use crate::shared::components::action_buttons::{DeleteButton, EditButton};
use crate::shared::components::card::Card;
use crate::shared::components::drawer::Drawer;
use crate::shared::components::toast::use_toast;
use crate::shared::components::ui::{Button, SubmitButton};
use crate::shared::form::{set_at, value_at, FieldConfig, FieldKind, FormFields, FormState, Rules};
use crate::shared::page_config::PageConfig;
use crate::shared::query::use_paged_query;
use crate::shared::table::{CellValue, Column, DataTable, FilterOption};
use crate::system::auth::session::use_auth;

use super::api;

fn user_fields(roles: Signal<Vec<ChoiceOption>>, is_edit: bool) -> Vec<FieldConfig> {
    let mut fields = vec![
        FieldConfig::new("firstName", "First Name", FieldKind::Text)
            .placeholder("John")
            .rules(Rules::new().required("First name is required"))
            .half_width(),
        FieldConfig::new("lastName", "Last Name", FieldKind::Text)
            .placeholder("Doe")
            .rules(Rules::new().required("Last name is required"))
            .half_width(),
        FieldConfig::new("username", "Username", FieldKind::Text)
            .placeholder("johndoe")
            .rules(Rules::new().required("Username is required")),
        FieldConfig::new("email", "Email", FieldKind::Email)
            .placeholder("john@example.com")
            .rules(Rules::new().required("Email is required").email("Invalid email"))
            .half_width(),
        FieldConfig::new("phone", "Phone", FieldKind::Text)
            .placeholder("01700000000")
            .half_width(),
        FieldConfig::new("roleId", "Role", FieldKind::Select { options: roles })
            .placeholder("Select a role")
            .rules(Rules::new().required("Role is required")),
    ];
    if !is_edit {
        fields.push(
            FieldConfig::new("password", "Password", FieldKind::Password)
                .placeholder("******")
                .rules(
                    Rules::new()
                        .required("Password is required")
                        .min_len(4, "Password must be at least 4 characters"),
                ),
        );
    }
    fields.push(FieldConfig::new("status", "Active", FieldKind::Switch));
    fields
}

/// Server expects numeric role ids; the select commits strings.
fn coerce_user_payload(payload: &mut Value) {
    if let Some(role_id) = value_at(payload, "roleId")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<i64>().ok())
    {
        set_at(payload, "roleId", json!(role_id));
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = use_auth();
    let toast = use_toast();

    let config = RwSignal::new(PageConfig::default());
    let query = use_paged_query(config, move |cfg: PageConfig| async move {
        api::list_users(&cfg, session.token_value().as_deref()).await
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

    let roles = RwSignal::new(Vec::<contracts::system::roles::Role>::new());
    Effect::new(move |_| {
        let token = session.token.get();
        spawn_local(async move {
            match api::fetch_all_roles(token.as_deref()).await {
                Ok(list) => roles.set(list),
                Err(e) => log::warn!("failed to load roles: {}", e),
            }
        });
    });

    let role_choices = Signal::derive(move || {
        roles
            .get()
            .iter()
            .map(|r| ChoiceOption::new(&r.name, r.id.to_string()))
            .collect::<Vec<_>>()
    });

    let filter_options = Signal::derive(move || {
        vec![
            FilterOption::new("roleId", "Role", role_choices.get()).single(),
            FilterOption::new(
                "status",
                "Status",
                vec![
                    ChoiceOption::new("Active", "true"),
                    ChoiceOption::new("Inactive", "false"),
                ],
            )
            .single(),
        ]
    });

    let drawer_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<User>::None);
    let form = FormState::new(json!({ "status": true }));

    let open_create = move |_| {
        form.values.set(json!({ "status": true }));
        form.clear_errors();
        editing.set(None);
        drawer_open.set(true);
    };

    let open_edit = move |user: User| {
        let mut values = json!({
            "firstName": user.first_name,
            "lastName": user.last_name,
            "username": user.username,
            "email": user.email,
            "status": user.status,
        });
        if let Some(role) = &user.role {
            set_at(&mut values, "roleId", json!(role.id.to_string()));
        }
        form.values.set(values);
        form.clear_errors();
        editing.set(Some(user));
        drawer_open.set(true);
    };

    let submit = move || {
        let is_edit = editing.get_untracked().is_some();
        if !form.validate(&user_fields(role_choices, is_edit)) {
            return;
        }
        let mut payload = form.values.get_untracked();
        coerce_user_payload(&mut payload);
        form.submitting.set(true);
        spawn_local(async move {
            let token = session.token_value();
            let result = match editing.get_untracked() {
                Some(user) => api::update_user(user.id, &payload, token.as_deref()).await,
                None => api::create_user(&payload, token.as_deref()).await,
            };
            match result {
                Ok(_) => {
                    toast.success(if is_edit {
                        "User updated successfully"
                    } else {
                        "User created successfully"
                    });
                    drawer_open.set(false);
                    query.refetch();
                }
                Err(e) => {
                    log::warn!("user save failed: {}", e);
                    toast.error("Failed to save user");
                }
            }
            form.submitting.set(false);
        });
    };

    let on_delete = move |id: i64| {
        spawn_local(async move {
            match api::delete_user(id, session.token_value().as_deref()).await {
                Ok(()) => {
                    toast.success("User deleted successfully");
                    query.refetch();
                }
                Err(e) => {
                    log::warn!("user delete failed: {}", e);
                    toast.error("Failed to delete user");
                }
            }
        });
    };

    let columns = vec![
        Column::new("id", "ID").data_index("id"),
        Column::new("name", "Name").render(|u: &User| {
            CellValue::Text(format!("{} {}", u.first_name, u.last_name))
        }),
        Column::new("username", "Username").data_index("username"),
        Column::new("role", "Role").render(|u: &User| {
            CellValue::Text(
                u.role
                    .as_ref()
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| "N/A".to_string()),
            )
        }),
        Column::new("status", "Status").render(|u: &User| {
            let active = u.status;
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
        Column::new("actions", "Actions").render(move |u: &User| {
            let id = u.id;
            let user = u.clone();
            CellValue::view(move || {
                let user = user.clone();
                view! {
                    <div class="table__actions">
                        <EditButton
                            permission="update-user"
                            on_click=Callback::new(move |_| open_edit(user.clone()))
                        />
                        <DeleteButton
                            permission="delete-user"
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
            title="User List"
            action=view! { <Button on_click=Callback::new(open_create)>"Create User"</Button> }
                .into_any()
        >
            <Drawer
                open=drawer_open
                title=Signal::derive(move || {
                    if editing.get().is_some() {
                        "Edit User".to_string()
                    } else {
                        "Create New User".to_string()
                    }
                })
                description="Fill in the details below."
            >
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }>
                    <FormFields
                        state=form
                        fields=user_fields(role_choices, editing.get().is_some())
                    />
                    <SubmitButton label="Save User" is_loading=form.submitting />
                </form>
            </Drawer>

            {move || {
                load_error
                    .get()
                    .map(|message| view! { <p class="load-error">{message}</p> })
            }}

            <DataTable
                title="Users"
                columns=columns.clone()
                rows=rows
                total=total
                loading=loading
                config=config
                filter_options=filter_options
                action_permission=vec!["update-user".to_string(), "delete-user".to_string()]
            />
        </Card>
    }
}
