use contracts::domain::medicine::Medicine;
use contracts::shared::ListResponse;
use serde_json::Value;

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::shared::page_config::PageConfig;

pub async fn list_medicines(
    config: &PageConfig,
    token: Option<&str>,
) -> Result<ListResponse<Medicine>, String> {
    get_json(&format!("/api/medicine?{}", config.to_query_string()), token).await
}

pub async fn create_medicine(payload: &Value, token: Option<&str>) -> Result<Value, String> {
    post_json("/api/medicine?query=single", payload, token).await
}

pub async fn update_medicine(
    id: i64,
    payload: &Value,
    token: Option<&str>,
) -> Result<Value, String> {
    put_json(&format!("/api/medicine/{}", id), payload, token).await
}

pub async fn delete_medicine(id: i64, token: Option<&str>) -> Result<(), String> {
    delete(&format!("/api/medicine/{}", id), token).await
}
