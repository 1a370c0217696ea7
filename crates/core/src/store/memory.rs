//! In-process store implementations backed by ordered maps.
//!
//! Used by tests and by the `memory` store backend for running the service
//! without a database. Ids are assigned from a per-table counter starting at 1
//! and are never reused.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::category::Category;
use crate::models::product::Product;
use crate::store::{CategoryStore, ProductStore, StoreHealth};
use crate::types::{DbId, UNASSIGNED_ID};

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<DbId, T>,
    next_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    /// Insert under a fresh id, or overwrite an existing row.
    fn upsert(&mut self, id: DbId, row: T) -> Result<DbId, StoreError> {
        if id == UNASSIGNED_ID {
            let id = self.next_id;
            self.next_id += 1;
            self.rows.insert(id, row);
            return Ok(id);
        }
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                Ok(id)
            }
            None => Err(StoreError::Fault(format!("no row with id {id} to update"))),
        }
    }
}

/// Category store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryCategoryStore {
    table: RwLock<Table<String>>,
}

impl MemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, StoreError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .map(|(id, name)| Category {
                id: *id,
                name: name.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).map(|name| Category {
            id,
            name: name.clone(),
        }))
    }

    async fn save(&self, category: Category) -> Result<Category, StoreError> {
        let mut table = self.table.write().await;
        let id = table.upsert(category.id, category.name.clone())?;
        Ok(Category { id, ..category })
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct ProductRow {
    name: String,
    price: f64,
    category_id: Option<DbId>,
}

/// Product store held in memory.
///
/// Category references are resolved against the given category store on every
/// read, so deleting a category leaves referencing products without one.
#[derive(Debug)]
pub struct MemoryProductStore {
    table: RwLock<Table<ProductRow>>,
    categories: Arc<MemoryCategoryStore>,
}

impl MemoryProductStore {
    pub fn new(categories: Arc<MemoryCategoryStore>) -> Self {
        Self {
            table: RwLock::new(Table::default()),
            categories,
        }
    }

    async fn resolve(&self, id: DbId, row: ProductRow) -> Result<Product, StoreError> {
        let category = match row.category_id {
            Some(category_id) => self.categories.find_by_id(category_id).await?,
            None => None,
        };
        Ok(Product {
            id,
            name: row.name,
            price: row.price,
            category,
        })
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<(DbId, ProductRow)> = {
            let table = self.table.read().await;
            table.rows.iter().map(|(id, row)| (*id, row.clone())).collect()
        };
        let mut products = Vec::with_capacity(rows.len());
        for (id, row) in rows {
            products.push(self.resolve(id, row).await?);
        }
        Ok(products)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, StoreError> {
        let row = self.table.read().await.rows.get(&id).cloned();
        match row {
            Some(row) => Ok(Some(self.resolve(id, row).await?)),
            None => Ok(None),
        }
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let category_id = product.category.as_ref().map(|c| c.id);
        if let Some(category_id) = category_id {
            if self.categories.find_by_id(category_id).await?.is_none() {
                return Err(StoreError::Constraint(format!(
                    "category {category_id} does not exist"
                )));
            }
        }

        let row = ProductRow {
            name: product.name,
            price: product.price,
            category_id,
        };
        let id = self.table.write().await.upsert(product.id, row.clone())?;
        self.resolve(id, row).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

/// Health probe for the memory backend; always healthy.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryHealth;

#[async_trait]
impl StoreHealth for MemoryHealth {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn category(name: &str) -> Category {
        Category {
            id: UNASSIGNED_ID,
            name: name.to_string(),
        }
    }

    fn product(name: &str, price: f64, category: Option<Category>) -> Product {
        Product {
            id: UNASSIGNED_ID,
            name: name.to_string(),
            price,
            category,
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let store = MemoryCategoryStore::new();
        let first = store.save(category("Category1")).await.unwrap();
        let second = store.save(category("Category2")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn save_with_id_updates_in_place() {
        let store = MemoryCategoryStore::new();
        let mut saved = store.save(category("Before")).await.unwrap();
        saved.name = "After".into();
        store.save(saved.clone()).await.unwrap();

        assert_eq!(store.find_by_id(saved.id).await.unwrap(), Some(saved));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_a_fault() {
        let store = MemoryCategoryStore::new();
        let ghost = Category {
            id: 99,
            name: "Ghost".into(),
        };
        assert_matches!(store.save(ghost).await, Err(StoreError::Fault(_)));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryCategoryStore::new();
        let first = store.save(category("A")).await.unwrap();
        store.delete_by_id(first.id).await.unwrap();
        let second = store.save(category("B")).await.unwrap();
        assert_eq!(second.id, 2);
        assert!(store.find_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn product_save_resolves_category_name() {
        let categories = Arc::new(MemoryCategoryStore::new());
        let books = categories.save(category("Books")).await.unwrap();
        let store = MemoryProductStore::new(Arc::clone(&categories));

        let reference = Category {
            id: books.id,
            name: String::new(),
        };
        let saved = store
            .save(product("Novel", 12.5, Some(reference)))
            .await
            .unwrap();
        assert_eq!(saved.category, Some(books));
    }

    #[tokio::test]
    async fn product_save_rejects_unknown_category() {
        let store = MemoryProductStore::new(Arc::new(MemoryCategoryStore::new()));
        let missing = Category {
            id: 5,
            name: "Missing".into(),
        };
        assert_matches!(
            store.save(product("Orphan", 1.0, Some(missing))).await,
            Err(StoreError::Constraint(_))
        );
    }

    #[tokio::test]
    async fn deleting_category_clears_product_reference() {
        let categories = Arc::new(MemoryCategoryStore::new());
        let toys = categories.save(category("Toys")).await.unwrap();
        let store = MemoryProductStore::new(Arc::clone(&categories));
        let saved = store
            .save(product("Kite", 8.0, Some(toys.clone())))
            .await
            .unwrap();

        categories.delete_by_id(toys.id).await.unwrap();

        let reloaded = store.find_by_id(saved.id).await.unwrap().unwrap();
        assert!(reloaded.category.is_none());
    }
}
