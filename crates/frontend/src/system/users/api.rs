use contracts::shared::{DataEnvelope, ListResponse};
use contracts::system::roles::Role;
use contracts::system::users::User;
use serde_json::Value;

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::shared::page_config::PageConfig;

pub async fn list_users(
    config: &PageConfig,
    token: Option<&str>,
) -> Result<ListResponse<User>, String> {
    get_json(&format!("/api/user?{}", config.to_query_string()), token).await
}

/// Unpaged role list, for the role filter and the role select.
pub async fn fetch_all_roles(token: Option<&str>) -> Result<Vec<Role>, String> {
    let envelope: DataEnvelope<Vec<Role>> = get_json("/api/role?query=all", token).await?;
    Ok(envelope.data)
}

pub async fn create_user(payload: &Value, token: Option<&str>) -> Result<Value, String> {
    post_json("/api/user/register", payload, token).await
}

pub async fn update_user(id: i64, payload: &Value, token: Option<&str>) -> Result<Value, String> {
    put_json(&format!("/api/user/{}", id), payload, token).await
}

pub async fn delete_user(id: i64, token: Option<&str>) -> Result<(), String> {
    delete(&format!("/api/user/{}", id), token).await
}
