//! Product entity.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::category::{Category, CategoryInput};
use crate::types::{DbId, UNASSIGNED_ID};

/// Message returned when a product payload fails validation.
pub const INVALID_PRODUCT: &str = "Invalid product";

/// A row from the `products` table joined with its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub category: Option<Category>,
}

/// Request body for creating or updating a product.
///
/// Every field is optional so an update can tell "not supplied" apart from
/// an explicit value such as a price of `0`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<CategoryInput>,
}

fn invalid() -> CoreError {
    CoreError::Validation(INVALID_PRODUCT.to_string())
}

/// Resolve a nested category payload into a reference. Only the id matters;
/// the store fills in the stored name.
fn category_ref(input: &CategoryInput) -> Result<Category, CoreError> {
    let id = input.id.filter(|id| *id != UNASSIGNED_ID).ok_or_else(invalid)?;
    Ok(Category {
        id,
        name: input.name.clone().unwrap_or_default(),
    })
}

impl ProductInput {
    /// Build an unpersisted product from a create payload.
    ///
    /// Requires a non-empty name. A missing price defaults to `0`.
    pub fn into_new(self) -> Result<Product, CoreError> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(invalid()),
        };
        let category = self.category.as_ref().map(category_ref).transpose()?;

        Ok(Product {
            id: UNASSIGNED_ID,
            name,
            price: self.price.unwrap_or_default(),
            category,
        })
    }
}

impl Product {
    /// Merge the supplied fields of an update payload into `self`.
    ///
    /// The whole payload is validated first; on failure `self` is untouched.
    pub fn apply(&mut self, input: &ProductInput) -> Result<(), CoreError> {
        if matches!(input.name.as_deref(), Some("")) {
            return Err(invalid());
        }
        let category = input.category.as_ref().map(category_ref).transpose()?;

        if let Some(name) = &input.name {
            self.name = name.clone();
        }
        if let Some(price) = input.price {
            self.price = price;
        }
        if category.is_some() {
            self.category = category;
        }
        Ok(())
    }
}
