//! Handlers for the `/products` resource.
//!
//! Create requires a non-empty `name`. Update merges only the supplied
//! fields and validates the merge before saving.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::models::product::{Product, ProductInput};
use storefront_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Product";

/// Load a product or fail with the `"... with ID - {id}"` 404.
async fn ensure_product_exists(state: &AppState, id: DbId) -> AppResult<Product> {
    state
        .products
        .get(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}

/// GET /products
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.list().await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ensure_product_exists(&state, id).await?;
    Ok(Json(product))
}

/// POST /products
///
/// Any `id` in the body is discarded; the store assigns one.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let Json(input) = payload?;
    let product = input.into_new()?;

    let created = state.products.save(product).await?;
    tracing::info!(
        product_id = created.id,
        name = %created.name,
        price = created.price,
        category_id = ?created.category.as_ref().map(|c| c.id),
        "Product created",
    );

    Ok(Json(created))
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let Json(input) = payload?;

    let mut product = state
        .products
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{ENTITY} not found with ID: {id}")))?;
    product.apply(&input)?;

    let updated = state.products.save(product).await?;
    tracing::info!(product_id = id, name = %updated.name, "Product updated");

    Ok(Json(updated))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<String> {
    ensure_product_exists(&state, id).await?;
    state.products.delete(id).await?;

    tracing::info!(product_id = id, "Product deleted");

    Ok(format!("Deleted {ENTITY} with ID - {id}"))
}
