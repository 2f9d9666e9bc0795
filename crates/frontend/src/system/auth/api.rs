use contracts::shared::DataEnvelope;
use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::system::roles::Permission;

use crate::shared::api_utils::{get_json, post_json};

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    post_json("/api/user", &request, None).await
}

/// Permission names granted to a role; feeds the session permission list.
pub async fn fetch_role_permissions(role_id: i64, token: &str) -> Result<Vec<String>, String> {
    let envelope: DataEnvelope<Vec<String>> = get_json(
        &format!("/api/settings/allpermission?roleId={}", role_id),
        Some(token),
    )
    .await?;
    Ok(envelope.data)
}

/// Every assignable permission, for the role form checklist.
pub async fn fetch_permission_catalog(token: &str) -> Result<Vec<Permission>, String> {
    let envelope: DataEnvelope<Vec<Permission>> =
        get_json("/api/settings/allpermission", Some(token)).await?;
    Ok(envelope.data)
}
