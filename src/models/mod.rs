//! Models are the data records the analyzer reads. They are created, edited,
//! and archived by whatever administrative system owns them; the core only
//! consumes read-only snapshots of them.
//!
//! Each catalog record is generated by the [catalog_model] macro and so has an
//! integer ID type, getters/setters, a builder, and an archive timestamp.
//!
//! [catalog_model]: ../macro.catalog_model.html

#[macro_use]
pub mod lib;
pub mod level;

load_models! { pub mod }
