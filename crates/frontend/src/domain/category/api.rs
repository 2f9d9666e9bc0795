use contracts::domain::category::Category;
use contracts::shared::{DataEnvelope, ListResponse};
use serde_json::Value;

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::shared::page_config::PageConfig;

pub async fn list_categories(
    config: &PageConfig,
    token: Option<&str>,
) -> Result<ListResponse<Category>, String> {
    get_json(&format!("/api/category?{}", config.to_query_string()), token).await
}

/// Unpaged list, for the medicine form's category select.
pub async fn fetch_all_categories(token: Option<&str>) -> Result<Vec<Category>, String> {
    let envelope: DataEnvelope<Vec<Category>> =
        get_json("/api/category?query=all", token).await?;
    Ok(envelope.data)
}

pub async fn create_category(payload: &Value, token: Option<&str>) -> Result<Value, String> {
    post_json("/api/category", payload, token).await
}

pub async fn update_category(
    id: i64,
    payload: &Value,
    token: Option<&str>,
) -> Result<Value, String> {
    put_json(&format!("/api/category/{}", id), payload, token).await
}

pub async fn delete_category(id: i64, token: Option<&str>) -> Result<(), String> {
    delete(&format!("/api/category/{}", id), token).await
}
