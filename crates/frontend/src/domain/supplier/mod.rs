pub mod api;
mod ui;

pub use ui::SuppliersPage;
