use contracts::domain::medicine::Medicine;
use contracts::shared::ListResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::get_json;
use crate::shared::components::card::Card;
use crate::system::auth::session::use_auth;

#[derive(Clone, Copy, Default)]
struct Totals {
    medicines: u64,
    categories: u64,
    suppliers: u64,
    users: u64,
}

async fn fetch_total(path: &str, token: Option<&str>) -> u64 {
    match get_json::<ListResponse<serde_json::Value>>(path, token).await {
        Ok(list) => list.total,
        Err(e) => {
            log::warn!("dashboard count fetch failed: {}", e);
            0
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_auth();
    let totals = RwSignal::new(Totals::default());
    let low_stock = RwSignal::new(Vec::<Medicine>::new());

    Effect::new(move |_| {
        let token = session.token.get();
        spawn_local(async move {
            let token = token.as_deref();
            let next = Totals {
                medicines: fetch_total("/api/medicine?page=1&count=1", token).await,
                categories: fetch_total("/api/category?page=1&count=1", token).await,
                suppliers: fetch_total("/api/supplier?page=1&count=1", token).await,
                users: fetch_total("/api/user?page=1&count=1", token).await,
            };
            totals.set(next);
        });
        let token = session.token.get_untracked();
        spawn_local(async move {
            match get_json::<ListResponse<Medicine>>(
                "/api/medicine?page=1&count=100",
                token.as_deref(),
            )
            .await
            {
                Ok(list) => {
                    let mut short: Vec<Medicine> = list
                        .data
                        .into_iter()
                        .filter(|m| m.total_stock() < m.reorder_level)
                        .collect();
                    short.truncate(5);
                    low_stock.set(short);
                }
                Err(e) => log::warn!("dashboard low stock fetch failed: {}", e),
            }
        });
    });

    let stat = move |label: &'static str, value: Signal<u64>| {
        view! {
            <div class="stat-card">
                <div class="stat-card__value">{move || value.get().to_string()}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        }
    };

    view! {
        <div class="dashboard">
            <div class="dashboard__stats">
                {stat("Medicines", Signal::derive(move || totals.get().medicines))}
                {stat("Categories", Signal::derive(move || totals.get().categories))}
                {stat("Suppliers", Signal::derive(move || totals.get().suppliers))}
                {stat("Users", Signal::derive(move || totals.get().users))}
            </div>

            <Card title="Low stock">
                {move || {
                    let items = low_stock.get();
                    if items.is_empty() {
                        view! { <p class="dashboard__empty">"No medicines below reorder level."</p> }
                            .into_any()
                    } else {
                        view! {
                            <ul class="dashboard__list">
                                {items
                                    .into_iter()
                                    .map(|m| {
                                        let stock = m.total_stock();
                                        let reorder = m.reorder_level;
                                        view! {
                                            <li class="dashboard__list-item">
                                                <span>{m.medicine_name.clone()}</span>
                                                <span class="dashboard__stock">
                                                    {format!("{} in stock (reorder at {})", stock, reorder)}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </Card>
        </div>
    }
}
