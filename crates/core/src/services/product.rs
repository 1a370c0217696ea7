use std::sync::Arc;

use crate::error::CoreError;
use crate::models::product::Product;
use crate::store::ProductStore;
use crate::types::DbId;

/// Product operations over an injected [`ProductStore`].
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Product>, CoreError> {
        let products = self.store.find_all().await?;
        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    pub async fn get(&self, id: DbId) -> Result<Option<Product>, CoreError> {
        Ok(self.store.find_by_id(id).await?)
    }

    pub async fn save(&self, product: Product) -> Result<Product, CoreError> {
        Ok(self.store.save(product).await?)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.store.delete_by_id(id).await?;
        tracing::debug!(product_id = id, "Product row removed");
        Ok(())
    }
}
