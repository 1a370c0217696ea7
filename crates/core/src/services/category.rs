use std::sync::Arc;

use crate::error::CoreError;
use crate::models::category::Category;
use crate::store::CategoryStore;
use crate::types::DbId;

/// Category operations over an injected [`CategoryStore`].
#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Category>, CoreError> {
        let categories = self.store.find_all().await?;
        tracing::debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    pub async fn get(&self, id: DbId) -> Result<Option<Category>, CoreError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn save(&self, category: Category) -> Result<Category, CoreError> {
        Ok(self.store.save(category).await?)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.store.delete_by_id(id).await?;
        tracing::debug!(category_id = id, "Category row removed");
        Ok(())
    }
}
