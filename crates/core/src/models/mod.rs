//! Entity structs and request DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct matching the stored row
//! - A `Deserialize` input DTO (all `Option` fields) shared by create and update

pub mod category;
pub mod product;
