//! Storefront domain crate: entities, store-access traits, and the
//! operations layer shared by the database and HTTP crates.

pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod types;
