pub mod api_utils;
pub mod choice;
pub mod components;
pub mod date_format;
pub mod export;
pub mod form;
pub mod page_config;
pub mod pdf;
pub mod query;
pub mod table;
