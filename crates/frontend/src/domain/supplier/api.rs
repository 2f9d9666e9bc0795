use contracts::domain::supplier::Supplier;
use contracts::shared::{DataEnvelope, ListResponse};
use serde_json::Value;

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::shared::page_config::PageConfig;

pub async fn list_suppliers(
    config: &PageConfig,
    token: Option<&str>,
) -> Result<ListResponse<Supplier>, String> {
    get_json(&format!("/api/supplier?{}", config.to_query_string()), token).await
}

/// Unpaged list, for the medicine form's supplier select and the contact
/// person suggestions.
pub async fn fetch_all_suppliers(token: Option<&str>) -> Result<Vec<Supplier>, String> {
    let envelope: DataEnvelope<Vec<Supplier>> =
        get_json("/api/supplier?query=all", token).await?;
    Ok(envelope.data)
}

pub async fn create_supplier(payload: &Value, token: Option<&str>) -> Result<Value, String> {
    post_json("/api/supplier", payload, token).await
}

pub async fn update_supplier(
    id: i64,
    payload: &Value,
    token: Option<&str>,
) -> Result<Value, String> {
    put_json(&format!("/api/supplier/{}", id), payload, token).await
}

pub async fn delete_supplier(id: i64, token: Option<&str>) -> Result<(), String> {
    delete(&format!("/api/supplier/{}", id), token).await
}
