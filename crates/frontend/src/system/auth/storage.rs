//! localStorage persistence for the session.

use contracts::system::auth::UserInfo;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const ROLE_ID_KEY: &str = "roleId";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn load_user() -> Option<UserInfo> {
    let raw = local_storage()?.get_item(USER_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn load_role_id() -> Option<i64> {
    let raw = local_storage()?.get_item(ROLE_ID_KEY).ok().flatten()?;
    raw.parse().ok()
}

pub fn store_session(token: &str, user: &UserInfo, role_id: Option<i64>) {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, token);
    if let Ok(user_json) = serde_json::to_string(user) {
        let _ = storage.set_item(USER_KEY, &user_json);
    }
    if let Some(role_id) = role_id {
        let _ = storage.set_item(ROLE_ID_KEY, &role_id.to_string());
    }
}

pub fn clear_session() {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.remove_item(TOKEN_KEY);
    let _ = storage.remove_item(USER_KEY);
    let _ = storage.remove_item(ROLE_ID_KEY);
}
