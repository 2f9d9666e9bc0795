use contracts::domain::medicine::Medicine;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Value};

use crate::shared::choice::ChoiceOption;
use crate::shared::components::action_buttons::{DeleteButton, EditButton};
use crate::shared::components::card::Card;
use crate::shared::components::drawer::Drawer;
use crate::shared::components::toast::use_toast;
use crate::shared::components::ui::{Button, SubmitButton};
use crate::shared::form::{
    set_at, value_at, FieldConfig, FieldKind, FormFields, FormState, Rules,
};
use crate::shared::page_config::PageConfig;
use crate::shared::query::use_paged_query;
use crate::shared::table::{CellValue, Column, DataTable, FilterOption};
use crate::system::auth::session::use_auth;

use super::api;
use crate::domain::category::api as category_api;
use crate::domain::supplier::api as supplier_api;

const DOSAGE_TYPES: [&str; 10] = [
    "Tablet", "Capsule", "Syrup", "Injection", "Cream", "Ointment", "Drops", "Inhaler",
    "Powder", "Gel",
];
const UNIT_TYPES: [&str; 10] = [
    "Tablet", "Strip", "Bottle", "Vial", "ml", "mg", "Piece", "Box", "Sachet", "Tube",
];

fn static_choices(values: &[&str]) -> Vec<ChoiceOption> {
    values.iter().map(|v| ChoiceOption::new(*v, *v)).collect()
}

fn medicine_fields(
    categories: Signal<Vec<ChoiceOption>>,
    suppliers: Signal<Vec<ChoiceOption>>,
) -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("medicineName", "Medicine Name", FieldKind::Text)
            .placeholder("e.g. Napa 500mg")
            .rules(Rules::new().required("Medicine name is required")),
        FieldConfig::new("genericName", "Generic Name", FieldKind::Text)
            .placeholder("e.g. Paracetamol")
            .rules(Rules::new().required("Generic name is required"))
            .half_width(),
        FieldConfig::new("brandName", "Brand Name", FieldKind::Text)
            .placeholder("e.g. Napa")
            .rules(Rules::new().required("Brand name is required"))
            .half_width(),
        FieldConfig::new("description", "Description", FieldKind::Textarea)
            .placeholder("Optional notes"),
        FieldConfig::new(
            "dosageType",
            "Dosage Type",
            FieldKind::Select {
                options: Signal::stored(static_choices(&DOSAGE_TYPES)),
            },
        )
        .placeholder("Select dosage type")
        .rules(Rules::new().required("Dosage type is required"))
        .half_width(),
        FieldConfig::new(
            "unitType",
            "Unit Type",
            FieldKind::Select {
                options: Signal::stored(static_choices(&UNIT_TYPES)),
            },
        )
        .placeholder("Select unit type")
        .rules(Rules::new().required("Unit type is required"))
        .half_width(),
        FieldConfig::new(
            "categoryId",
            "Category",
            FieldKind::Select { options: categories },
        )
        .placeholder("Select a category")
        .rules(Rules::new().required("Category is required"))
        .half_width(),
        FieldConfig::new(
            "supplierId",
            "Supplier",
            FieldKind::Select { options: suppliers },
        )
        .placeholder("Select a supplier")
        .half_width(),
        FieldConfig::new("reorderLevel", "Reorder Level", FieldKind::Number)
            .placeholder("0"),
    ]
}

fn batch_fields(index: usize) -> Vec<FieldConfig> {
    vec![
        FieldConfig::new(
            &format!("batches[{}].batchNumber", index),
            "Batch Number",
            FieldKind::Text,
        )
        .placeholder("BTH-2026-001")
        .rules(Rules::new().required("Batch number is required"))
        .half_width(),
        FieldConfig::new(
            &format!("batches[{}].quantity", index),
            "Quantity",
            FieldKind::Number,
        )
        .rules(Rules::new().required("Quantity is required"))
        .half_width(),
        FieldConfig::new(
            &format!("batches[{}].manufacturingDate", index),
            "Manufacturing Date",
            FieldKind::Date,
        )
        .half_width(),
        FieldConfig::new(
            &format!("batches[{}].expiryDate", index),
            "Expiry Date",
            FieldKind::Date,
        )
        .rules(Rules::new().required("Expiry date is required"))
        .half_width(),
        FieldConfig::new(
            &format!("batches[{}].purchasePrice", index),
            "Purchase Price",
            FieldKind::Number,
        )
        .half_width(),
        FieldConfig::new(
            &format!("batches[{}].sellingPrice", index),
            "Selling Price",
            FieldKind::Number,
        )
        .half_width(),
    ]
}

fn coerce_int(payload: &mut Value, path: &str) {
    if let Some(n) = value_at(payload, path)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<i64>().ok())
    {
        set_at(payload, path, json!(n));
    }
}

fn coerce_float(payload: &mut Value, path: &str) {
    if let Some(n) = value_at(payload, path)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<f64>().ok())
    {
        set_at(payload, path, json!(n));
    }
}

/// Inputs commit strings; the server wants numbers for ids, counts and
/// prices.
fn coerce_medicine_payload(payload: &mut Value) {
    coerce_int(payload, "categoryId");
    coerce_int(payload, "supplierId");
    coerce_int(payload, "reorderLevel");
    let batch_count = value_at(payload, "batches")
        .and_then(Value::as_array)
        .map(|a| a.len())
        .unwrap_or(0);
    for i in 0..batch_count {
        coerce_int(payload, &format!("batches[{}].quantity", i));
        coerce_float(payload, &format!("batches[{}].purchasePrice", i));
        coerce_float(payload, &format!("batches[{}].sellingPrice", i));
    }
}

/// Stock at or below the reorder level is flagged red in the table.
fn stock_class(stock: i64, reorder_level: i64) -> &'static str {
    if stock <= reorder_level {
        "stock-cell stock-cell--low"
    } else {
        "stock-cell"
    }
}

fn empty_batch() -> Value {
    json!({
        "batchNumber": "",
        "quantity": "1",
        "manufacturingDate": "",
        "expiryDate": "",
        "purchasePrice": "0",
        "sellingPrice": "0",
    })
}

#[component]
pub fn MedicinesPage() -> impl IntoView {
    let session = use_auth();
    let toast = use_toast();

    let config = RwSignal::new(PageConfig::default());
    let query = use_paged_query(config, move |cfg: PageConfig| async move {
        api::list_medicines(&cfg, session.token_value().as_deref()).await
    });

    let rows = Signal::derive(move || {
        query
            .state
            .get()
            .data
            .map(|list| list.data)
            .unwrap_or_default()
    });
    let total = Signal::derive(move || query.state.get().data.map(|l| l.total).unwrap_or(0));
    let loading = Signal::derive(move || query.state.get().is_loading);
    let load_error = Signal::derive(move || query.state.get().error);

    let categories = RwSignal::new(Vec::<contracts::domain::category::Category>::new());
    let suppliers = RwSignal::new(Vec::<contracts::domain::supplier::Supplier>::new());
    Effect::new(move |_| {
        let token = session.token.get();
        spawn_local(async move {
            let token = token.as_deref();
            match category_api::fetch_all_categories(token).await {
                Ok(list) => categories.set(list),
                Err(e) => log::warn!("failed to load categories: {}", e),
            }
            match supplier_api::fetch_all_suppliers(token).await {
                Ok(list) => suppliers.set(list),
                Err(e) => log::warn!("failed to load suppliers: {}", e),
            }
        });
    });

    let category_choices = Signal::derive(move || {
        categories
            .get()
            .iter()
            .map(|c| ChoiceOption::new(&c.name, c.id.to_string()))
            .collect::<Vec<_>>()
    });
    let supplier_choices = Signal::derive(move || {
        suppliers
            .get()
            .iter()
            .map(|s| ChoiceOption::new(&s.name, s.id.to_string()))
            .collect::<Vec<_>>()
    });

    let filter_options = Signal::derive(move || {
        vec![
            FilterOption::new("categoryId", "Category", category_choices.get()).single(),
            FilterOption::new("dosageType", "Dosage Type", static_choices(&DOSAGE_TYPES)),
        ]
    });

    let drawer_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Medicine>::None);
    let form = FormState::new(json!({ "batches": [empty_batch()] }));

    let batch_count = Signal::derive(move || {
        form.values.with(|v| {
            v.get("batches")
                .and_then(Value::as_array)
                .map(|a| a.len())
                .unwrap_or(0)
        })
    });

    let add_batch = move |_| {
        form.values.update(|values| {
            if let Some(arr) = values.get_mut("batches").and_then(Value::as_array_mut) {
                arr.push(empty_batch());
            } else {
                set_at(values, "batches", json!([empty_batch()]));
            }
        });
    };

    // At least one batch row stays.
    let remove_batch = move |index: usize| {
        form.values.update(|values| {
            if let Some(arr) = values.get_mut("batches").and_then(Value::as_array_mut) {
                if arr.len() > 1 && index < arr.len() {
                    arr.remove(index);
                }
            }
        });
        form.clear_errors();
    };

    let open_create = move |_| {
        form.values.set(json!({ "batches": [empty_batch()] }));
        form.clear_errors();
        editing.set(None);
        drawer_open.set(true);
    };

    let open_edit = move |medicine: Medicine| {
        let batches = medicine
            .batches
            .iter()
            .map(|b| {
                json!({
                    "batchNumber": b.batch_number,
                    "quantity": b.quantity.to_string(),
                    "manufacturingDate": b.manufacturing_date,
                    "expiryDate": b.expiry_date,
                    "purchasePrice": b.purchase_price.to_string(),
                    "sellingPrice": b.selling_price.to_string(),
                })
            })
            .collect::<Vec<_>>();
        let mut values = json!({
            "medicineName": medicine.medicine_name,
            "genericName": medicine.generic_name,
            "brandName": medicine.brand_name,
            "description": medicine.description,
            "dosageType": medicine.dosage_type,
            "unitType": medicine.unit_type,
            "reorderLevel": medicine.reorder_level.to_string(),
            "batches": if batches.is_empty() { json!([empty_batch()]) } else { json!(batches) },
        });
        if let Some(category) = &medicine.category {
            set_at(&mut values, "categoryId", json!(category.id.to_string()));
        }
        if let Some(supplier) = &medicine.supplier {
            set_at(&mut values, "supplierId", json!(supplier.id.to_string()));
        }
        form.values.set(values);
        form.clear_errors();
        editing.set(Some(medicine));
        drawer_open.set(true);
    };

    let all_fields = move || {
        let mut fields = medicine_fields(category_choices, supplier_choices);
        for i in 0..batch_count.get_untracked() {
            fields.extend(batch_fields(i));
        }
        fields
    };

    let submit = move || {
        if !form.validate(&all_fields()) {
            return;
        }
        let mut payload = form.values.get_untracked();
        coerce_medicine_payload(&mut payload);
        let is_edit = editing.get_untracked().is_some();
        form.submitting.set(true);
        spawn_local(async move {
            let token = session.token_value();
            let result = match editing.get_untracked() {
                Some(medicine) => {
                    api::update_medicine(medicine.id, &payload, token.as_deref()).await
                }
                None => api::create_medicine(&payload, token.as_deref()).await,
            };
            match result {
                Ok(_) => {
                    toast.success(if is_edit {
                        "Medicine updated successfully"
                    } else {
                        "Medicine created successfully"
                    });
                    drawer_open.set(false);
                    query.refetch();
                }
                Err(e) => {
                    log::warn!("medicine save failed: {}", e);
                    toast.error("Failed to save medicine");
                }
            }
            form.submitting.set(false);
        });
    };

    let on_delete = move |id: i64| {
        spawn_local(async move {
            match api::delete_medicine(id, session.token_value().as_deref()).await {
                Ok(()) => {
                    toast.success("Medicine deleted successfully");
                    query.refetch();
                }
                Err(e) => {
                    log::warn!("medicine delete failed: {}", e);
                    toast.error("Failed to delete medicine");
                }
            }
        });
    };

    let columns = vec![
        Column::new("id", "ID").data_index("id"),
        Column::new("medicineName", "Medicine Name").data_index("medicineName"),
        Column::new("genericName", "Generic Name").data_index("genericName"),
        Column::new("brandName", "Brand Name").data_index("brandName"),
        Column::new("category", "Category").render(|m: &Medicine| {
            CellValue::Text(
                m.category
                    .as_ref()
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "N/A".to_string()),
            )
        }),
        Column::new("supplier", "Supplier").render(|m: &Medicine| {
            CellValue::Text(
                m.supplier
                    .as_ref()
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| "N/A".to_string()),
            )
        }),
        Column::new("totalStock", "Stock").render(|m: &Medicine| {
            let stock = m.total_stock();
            let class = stock_class(stock, m.reorder_level);
            CellValue::view(move || {
                view! { <span class=class>{stock}</span> }.into_any()
            })
        }),
        Column::new("dosageType", "Dosage Type").data_index("dosageType"),
        Column::new("createdAt", "Created At").data_index("createdAt"),
        Column::new("actions", "Actions").render(move |m: &Medicine| {
            let id = m.id;
            let medicine = m.clone();
            CellValue::view(move || {
                let medicine = medicine.clone();
                view! {
                    <div class="table__actions">
                        <EditButton
                            permission="update-medicine"
                            on_click=Callback::new(move |_| open_edit(medicine.clone()))
                        />
                        <DeleteButton
                            permission="delete-medicine"
                            on_click=Callback::new(move |_| on_delete(id))
                        />
                    </div>
                }
                .into_any()
            })
        }),
    ];

    view! {
        <Card
            title="Medicine List"
            action=view! {
                <Button on_click=Callback::new(open_create)>"Create Medicine"</Button>
            }
                .into_any()
        >
            <Drawer
                open=drawer_open
                title=Signal::derive(move || {
                    if editing.get().is_some() {
                        "Edit Medicine".to_string()
                    } else {
                        "Create Medicine".to_string()
                    }
                })
                description="Fill in the medicine details and its stock batches."
            >
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }>
                    <FormFields
                        state=form
                        fields=medicine_fields(category_choices, supplier_choices)
                    />

                    <div class="batch-list">
                        <div class="batch-list__header">
                            <h4>"Batches"</h4>
                            <Button on_click=Callback::new(add_batch) class="btn--outline">
                                "Add Batch"
                            </Button>
                        </div>
                        {move || {
                            (0..batch_count.get())
                                .map(|index| {
                                    view! {
                                        <div class="batch-list__item">
                                            <div class="batch-list__item-header">
                                                <span>{format!("Batch {}", index + 1)}</span>
                                                <button
                                                    type="button"
                                                    class="btn btn--icon btn--danger"
                                                    on:click=move |_| remove_batch(index)
                                                >
                                                    "Remove"
                                                </button>
                                            </div>
                                            <FormFields state=form fields=batch_fields(index) />
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <SubmitButton label="Save Medicine" is_loading=form.submitting />
                </form>
            </Drawer>

            {move || {
                load_error
                    .get()
                    .map(|message| view! { <p class="load-error">{message}</p> })
            }}

            <DataTable
                title="Medicines"
                columns=columns.clone()
                rows=rows
                total=total
                loading=loading
                config=config
                filter_options=filter_options
                action_permission=vec![
                    "update-medicine".to_string(),
                    "delete-medicine".to_string(),
                ]
            />
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_ids_counts_and_prices() {
        let mut payload = json!({
            "medicineName": "Napa",
            "categoryId": "3",
            "supplierId": "7",
            "reorderLevel": "25",
            "batches": [
                { "batchNumber": "B1", "quantity": "30", "purchasePrice": "1.5", "sellingPrice": "2" },
                { "batchNumber": "B2", "quantity": "10", "purchasePrice": "0.8", "sellingPrice": "1.2" }
            ]
        });
        coerce_medicine_payload(&mut payload);
        assert_eq!(payload["categoryId"], json!(3));
        assert_eq!(payload["supplierId"], json!(7));
        assert_eq!(payload["reorderLevel"], json!(25));
        assert_eq!(payload["batches"][0]["quantity"], json!(30));
        assert_eq!(payload["batches"][0]["purchasePrice"], json!(1.5));
        assert_eq!(payload["batches"][1]["sellingPrice"], json!(1.2));
    }

    #[test]
    fn coercion_leaves_non_numeric_strings_alone() {
        let mut payload = json!({ "categoryId": "", "reorderLevel": "abc" });
        coerce_medicine_payload(&mut payload);
        assert_eq!(payload["categoryId"], json!(""));
        assert_eq!(payload["reorderLevel"], json!("abc"));
    }

    #[test]
    fn stock_at_or_below_reorder_level_is_flagged_low() {
        assert_eq!(stock_class(10, 25), "stock-cell stock-cell--low");
        assert_eq!(stock_class(25, 25), "stock-cell stock-cell--low");
        assert_eq!(stock_class(26, 25), "stock-cell");
    }

    #[test]
    fn coercion_accepts_already_numeric_values() {
        let mut payload = json!({ "categoryId": 3, "batches": [{ "quantity": 5 }] });
        coerce_medicine_payload(&mut payload);
        assert_eq!(payload["categoryId"], json!(3));
        assert_eq!(payload["batches"][0]["quantity"], json!(5));
    }
}
