#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use storefront_api::config::{ServerConfig, StoreBackend};
use storefront_api::router::build_app_router;
use storefront_api::state::AppState;
use storefront_core::error::StoreError;
use storefront_core::models::category::Category;
use storefront_core::models::product::Product;
use storefront_core::store::memory::{MemoryCategoryStore, MemoryHealth, MemoryProductStore};
use storefront_core::store::{CategoryStore, ProductStore, StoreHealth};
use storefront_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        database_max_connections: 1,
    }
}

// ---------------------------------------------------------------------------
// Store doubles
// ---------------------------------------------------------------------------

/// Memory category store that counts `save` calls.
#[derive(Default)]
pub struct CountingCategoryStore {
    pub inner: Arc<MemoryCategoryStore>,
    saves: AtomicUsize,
}

impl CountingCategoryStore {
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CategoryStore for CountingCategoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, category: Category) -> Result<Category, StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(category).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        self.inner.delete_by_id(id).await
    }
}

/// Memory product store that counts `save` calls.
pub struct CountingProductStore {
    inner: MemoryProductStore,
    saves: AtomicUsize,
}

impl CountingProductStore {
    pub fn new(categories: Arc<MemoryCategoryStore>) -> Self {
        Self {
            inner: MemoryProductStore::new(categories),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductStore for CountingProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(product).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        self.inner.delete_by_id(id).await
    }
}

/// Store whose every operation fails, standing in for a lost database.
pub struct BrokenStore;

fn fault() -> StoreError {
    StoreError::Fault("connection refused".to_string())
}

#[async_trait]
impl CategoryStore for BrokenStore {
    async fn find_all(&self) -> Result<Vec<Category>, StoreError> {
        Err(fault())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Category>, StoreError> {
        Err(fault())
    }

    async fn save(&self, _category: Category) -> Result<Category, StoreError> {
        Err(fault())
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<(), StoreError> {
        Err(fault())
    }
}

#[async_trait]
impl ProductStore for BrokenStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Err(fault())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Product>, StoreError> {
        Err(fault())
    }

    async fn save(&self, _product: Product) -> Result<Product, StoreError> {
        Err(fault())
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<(), StoreError> {
        Err(fault())
    }
}

#[async_trait]
impl StoreHealth for BrokenStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Err(fault())
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Router over counting memory stores, with handles for assertions.
pub struct TestApp {
    pub router: Router,
    pub categories: Arc<CountingCategoryStore>,
    pub products: Arc<CountingProductStore>,
}

/// Build the full application router (same middleware stack as production)
/// over fresh memory stores.
pub fn build_test_app() -> TestApp {
    let categories = Arc::new(CountingCategoryStore::default());
    let products = Arc::new(CountingProductStore::new(Arc::clone(&categories.inner)));

    let config = test_config();
    let state = AppState::new(
        Arc::new(config.clone()),
        categories.clone(),
        products.clone(),
        Arc::new(MemoryHealth),
    );

    TestApp {
        router: build_app_router(state, &config),
        categories,
        products,
    }
}

/// Build the router over stores that fail every call.
pub fn build_broken_app() -> Router {
    let config = test_config();
    let state = AppState::new(
        Arc::new(config.clone()),
        Arc::new(BrokenStore),
        Arc::new(BrokenStore),
        Arc::new(BrokenStore),
    );
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
