//! Store-access traits.
//!
//! Each entity is read and written through four primitive operations. No
//! validation happens at this layer; implementations pass straight through
//! to their storage engine.

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::category::Category;
use crate::models::product::Product;
use crate::types::DbId;

/// Store access for categories.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories, ordered by id.
    async fn find_all(&self) -> Result<Vec<Category>, StoreError>;

    /// A single category, or `None` when no row has this id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError>;

    /// Insert when `category.id` is unassigned, otherwise update in place.
    /// Returns the stored row.
    async fn save(&self, category: Category) -> Result<Category, StoreError>;

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError>;
}

/// Store access for products. Reads embed the referenced category.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, ordered by id.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    /// A single product, or `None` when no row has this id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, StoreError>;

    /// Insert when `product.id` is unassigned, otherwise update in place.
    /// Only the category id is written; the returned row carries the stored
    /// category.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError>;
}

/// Liveness probe for the storage engine behind the stores.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}
