#[macro_use]
pub mod catalog_model;
