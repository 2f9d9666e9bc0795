use contracts::shared::ListResponse;
use contracts::system::roles::Role;
use serde_json::{json, Value};

use crate::shared::api_utils::{delete, get_json, patch_json, post_json};
use crate::shared::page_config::PageConfig;

pub async fn list_roles(
    config: &PageConfig,
    token: Option<&str>,
) -> Result<ListResponse<Role>, String> {
    get_json(&format!("/api/role?{}", config.to_query_string()), token).await
}

pub async fn create_role(payload: &Value, token: Option<&str>) -> Result<Value, String> {
    post_json("/api/role", payload, token).await
}

/// Replaces a role's permission set with the given permission ids.
pub async fn update_role_permissions(
    role_id: i64,
    permission_ids: &[i64],
    token: Option<&str>,
) -> Result<Value, String> {
    let body = json!({ "role": role_id, "permissionId": permission_ids });
    patch_json("/api/settings/updateotherpermission", &body, token).await
}

pub async fn delete_role(id: i64, token: Option<&str>) -> Result<(), String> {
    delete(&format!("/api/role/{}", id), token).await
}
