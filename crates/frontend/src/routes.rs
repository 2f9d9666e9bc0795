//! In-app navigation: a page enum and a signal-backed nav store, switched
//! by the shell instead of a URL router.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Medicines,
    Categories,
    Suppliers,
    Users,
    Roles,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Medicines,
        Page::Categories,
        Page::Suppliers,
        Page::Users,
        Page::Roles,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Medicines => "Medicines",
            Page::Categories => "Categories",
            Page::Suppliers => "Suppliers",
            Page::Users => "Users",
            Page::Roles => "Roles",
        }
    }
}

#[derive(Clone, Copy)]
pub struct NavStore {
    pub current: RwSignal<Page>,
}

impl NavStore {
    pub fn go(&self, page: Page) {
        self.current.set(page);
    }
}

pub fn provide_nav() -> NavStore {
    let nav = NavStore {
        current: RwSignal::new(Page::default()),
    };
    provide_context(nav);
    nav
}

pub fn use_nav() -> NavStore {
    use_context::<NavStore>().expect("NavStore not provided in context")
}
