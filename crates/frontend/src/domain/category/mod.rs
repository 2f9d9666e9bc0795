pub mod api;
mod ui;

pub use ui::CategoriesPage;
