pub mod category;
pub mod medicine;
pub mod supplier;
