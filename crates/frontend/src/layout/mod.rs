//! Admin shell: sidebar navigation, top header, page outlet.

use leptos::prelude::*;

use crate::routes::{use_nav, Page};
use crate::system::auth::guard::{check_permission, PermissionRequirement};
use crate::system::auth::session::use_auth;

pub fn page_requirement(page: Page) -> PermissionRequirement {
    match page {
        Page::Dashboard | Page::Medicines | Page::Categories | Page::Suppliers => {
            PermissionRequirement::any(&["readAll-user", "create-user"])
        }
        Page::Users => PermissionRequirement::any(&[
            "create-user",
            "readAll-user",
            "readSingle-user",
            "update-user",
            "delete-user",
        ]),
        Page::Roles => PermissionRequirement::any(&[
            "create-role",
            "readAll-role",
            "readSingle-role",
            "update-role",
            "delete-role",
        ]),
    }
}

#[component]
pub fn AdminShell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="admin">
            <SideNav />
            <div class="admin__main">
                <TopHeader />
                <main class="admin__content">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn SideNav() -> impl IntoView {
    let nav = use_nav();
    let session = use_auth();

    view! {
        <aside class="sidenav">
            <div class="sidenav__brand">"PharmaDesk"</div>
            <ul class="sidenav__menu">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        let requirement = StoredValue::new(page_requirement(page));
                        view! {
                            <Show when=move || {
                                let held = session.permissions.get();
                                requirement.with_value(|req| check_permission(&held, req))
                            }>
                                <li class="sidenav__item">
                                    <button
                                        type="button"
                                        class=move || {
                                            if nav.current.get() == page {
                                                "sidenav__link sidenav__link--active"
                                            } else {
                                                "sidenav__link"
                                            }
                                        }
                                        on:click=move |_| nav.go(page)
                                    >
                                        {page.title()}
                                    </button>
                                </li>
                            </Show>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

#[component]
fn TopHeader() -> impl IntoView {
    let session = use_auth();
    let nav = use_nav();

    let display_name = move || {
        session
            .user
            .get()
            .map(|u| u.display_name())
            .unwrap_or_else(|| "Admin User".to_string())
    };

    view! {
        <header class="topbar">
            <div class="topbar__title">{move || nav.current.get().title()}</div>
            <div class="topbar__user">
                <span class="topbar__name">{display_name}</span>
                <button
                    type="button"
                    class="btn btn--ghost"
                    on:click=move |_| session.logout()
                >
                    "Log out"
                </button>
            </div>
        </header>
    }
}
