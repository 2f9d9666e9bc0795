use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: i64,
    pub medicine_name: String,
    pub generic_name: String,
    pub brand_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub dosage_type: String,
    pub unit_type: String,
    #[serde(default)]
    pub reorder_level: i64,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub supplier: Option<SupplierRef>,
    #[serde(default)]
    pub batches: Vec<MedicineBatch>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Medicine {
    /// Stock on hand across all batches.
    pub fn total_stock(&self) -> i64 {
        self.batches.iter().map(|b| b.quantity).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicineBatch {
    #[serde(default)]
    pub id: Option<i64>,
    pub batch_number: String,
    pub quantity: i64,
    #[serde(default)]
    pub manufacturing_date: Option<String>,
    pub expiry_date: String,
    pub purchase_price: f64,
    pub selling_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRef {
    pub id: i64,
    pub name: String,
}
