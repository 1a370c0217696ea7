use std::sync::Arc;

use storefront_core::services::{CategoryService, ProductService};
use storefront_core::store::memory::{MemoryCategoryStore, MemoryHealth, MemoryProductStore};
use storefront_core::store::{CategoryStore, ProductStore, StoreHealth};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Category operations.
    pub categories: CategoryService,
    /// Product operations.
    pub products: ProductService,
    /// Liveness probe for the backing store.
    pub store_health: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Wire services over the given store-access implementations.
    pub fn new(
        config: Arc<ServerConfig>,
        category_store: Arc<dyn CategoryStore>,
        product_store: Arc<dyn ProductStore>,
        store_health: Arc<dyn StoreHealth>,
    ) -> Self {
        Self {
            config,
            categories: CategoryService::new(category_store),
            products: ProductService::new(product_store),
            store_health,
        }
    }

    /// State backed by fresh in-memory stores.
    pub fn in_memory(config: Arc<ServerConfig>) -> Self {
        let categories = Arc::new(MemoryCategoryStore::new());
        let products = Arc::new(MemoryProductStore::new(Arc::clone(&categories)));
        Self::new(config, categories, products, Arc::new(MemoryHealth))
    }
}
