//! Operations layer.
//!
//! Services sit between the HTTP surface and store access. They hold a store
//! handed in at construction and only delegate to it: absence is reported as
//! `Ok(None)` and the caller decides what status that becomes.

pub mod category;
pub mod product;

pub use category::CategoryService;
pub use product::ProductService;
