//! Category entity.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, UNASSIGNED_ID};

/// Message returned when a category payload fails validation.
pub const INVALID_CATEGORY: &str = "Invalid category";

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// Request body for creating or updating a category.
///
/// Any `id` in the body is ignored by create and update; it is only read when
/// the DTO is nested inside a product payload as a category reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryInput {
    pub id: Option<DbId>,
    pub name: Option<String>,
}

impl CategoryInput {
    /// Return the supplied name if it is present and non-empty.
    pub fn validated_name(&self) -> Result<&str, CoreError> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(CoreError::Validation(INVALID_CATEGORY.to_string())),
        }
    }

    /// Build an unpersisted category from a create payload.
    pub fn into_new(self) -> Result<Category, CoreError> {
        let name = self.validated_name()?.to_string();
        Ok(Category {
            id: UNASSIGNED_ID,
            name,
        })
    }
}

impl Category {
    /// Replace the name from an update payload.
    ///
    /// The payload must carry a non-empty name; on failure `self` is untouched.
    pub fn apply(&mut self, input: &CategoryInput) -> Result<(), CoreError> {
        let name = input.validated_name()?;
        self.name = name.to_string();
        Ok(())
    }
}
