use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::shared::components::toast::use_toast;
use crate::shared::components::ui::SubmitButton;
use crate::shared::form::{FieldConfig, FieldKind, FormFields, FormState, Rules};
use crate::system::auth::{api, session::use_auth};

fn login_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("email", "Email", FieldKind::Email)
            .placeholder("Enter your email")
            .rules(Rules::new().required("Email is required").email("Invalid email")),
        FieldConfig::new("password", "Password", FieldKind::Password)
            .placeholder("Enter your password")
            .rules(Rules::new().required("Password is required")),
    ]
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_auth();
    let toast = use_toast();
    let state = FormState::new(json!({}));

    let submit = move || {
        if !state.validate(&login_fields()) {
            return;
        }
        let email = state.string_value("email");
        let password = state.string_value("password");
        state.submitting.set(true);
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(response) => {
                    session.set_credentials(response.token, response.user, response.role_id);
                    toast.success("Login successful!");
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    toast.error("Login failed. Please check your credentials.");
                }
            }
            state.submitting.set(false);
        });
    };

    view! {
        <div class="login">
            <div class="login__card">
                <h1 class="login__title">"Sign in"</h1>
                <p class="login__subtitle">
                    "Enter your email and password to access the admin panel"
                </p>
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }>
                    <FormFields state=state fields=login_fields() />
                    <SubmitButton label="Sign In" is_loading=state.submitting />
                </form>
            </div>
        </div>
    }
}
