use leptos::prelude::*;

use crate::domain::category::CategoriesPage;
use crate::domain::medicine::MedicinesPage;
use crate::domain::supplier::SuppliersPage;
use crate::layout::{page_requirement, AdminShell};
use crate::routes::{provide_nav, use_nav, Page};
use crate::shared::components::toast::{ToastHost, ToastService};
use crate::system::auth::guard::{PermissionGuard, RequireAuth};
use crate::system::auth::session::provide_auth;
use crate::system::pages::{DashboardPage, LoginPage};
use crate::system::roles::RolesPage;
use crate::system::users::UsersPage;

#[component]
pub fn App() -> impl IntoView {
    provide_auth();
    provide_context(ToastService::new());
    provide_nav();

    view! {
        <AppRoutes />
        <ToastHost />
    }
}

#[component]
fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth fallback=|| view! { <LoginPage /> }>
            <AdminShell>
                <PageOutlet />
            </AdminShell>
        </RequireAuth>
    }
}

#[component]
fn PageOutlet() -> impl IntoView {
    let nav = use_nav();

    view! {
        {move || {
            let page = nav.current.get();
            view! {
                <PermissionGuard requirement=page_requirement(page)>
                    {match page {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Medicines => view! { <MedicinesPage /> }.into_any(),
                        Page::Categories => view! { <CategoriesPage /> }.into_any(),
                        Page::Suppliers => view! { <SuppliersPage /> }.into_any(),
                        Page::Users => view! { <UsersPage /> }.into_any(),
                        Page::Roles => view! { <RolesPage /> }.into_any(),
                    }}
                </PermissionGuard>
            }
        }}
    }
}
