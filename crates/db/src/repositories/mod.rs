//! Repository layer.
//!
//! Each repository wraps a [`DbPool`](crate::DbPool) and implements the
//! matching store-access trait from `storefront_core::store`.

pub mod category_repo;
pub mod health;
pub mod product_repo;

pub use category_repo::CategoryRepo;
pub use health::PgHealth;
pub use product_repo::ProductRepo;
