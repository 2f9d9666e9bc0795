//! Session store: token, user, role id and permission list as signals,
//! provided once at the app root. Login and logout are the only writers.

use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Copy)]
pub struct AuthSession {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<UserInfo>>,
    pub role_id: RwSignal<Option<i64>>,
    pub permissions: RwSignal<Vec<String>>,
}

impl AuthSession {
    fn empty() -> Self {
        Self {
            token: RwSignal::new(None),
            user: RwSignal::new(None),
            role_id: RwSignal::new(None),
            permissions: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.get().iter().any(|p| p == permission)
    }

    pub fn token_value(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Store a fresh login, persist it, and load the role's permissions.
    pub fn set_credentials(&self, token: String, user: UserInfo, role_id: Option<i64>) {
        storage::store_session(&token, &user, role_id);
        self.token.set(Some(token));
        self.user.set(Some(user));
        self.role_id.set(role_id);
        self.load_permissions();
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.token.set(None);
        self.user.set(None);
        self.role_id.set(None);
        self.permissions.set(Vec::new());
    }

    fn load_permissions(&self) {
        let Some(role_id) = self.role_id.get_untracked() else {
            return;
        };
        let Some(token) = self.token.get_untracked() else {
            return;
        };
        let permissions = self.permissions;
        spawn_local(async move {
            match api::fetch_role_permissions(role_id, &token).await {
                Ok(list) => permissions.set(list),
                Err(e) => log::warn!("failed to load permissions: {}", e),
            }
        });
    }
}

/// Build the session from persisted storage and put it in context.
/// Call once, from the app root.
pub fn provide_auth() -> AuthSession {
    let session = AuthSession::empty();

    if let Some(token) = storage::load_token() {
        session.token.set(Some(token));
        session.user.set(storage::load_user());
        session.role_id.set(storage::load_role_id());
        session.load_permissions();
    }

    provide_context(session);
    session
}

pub fn use_auth() -> AuthSession {
    use_context::<AuthSession>().expect("AuthSession not provided in context")
}
