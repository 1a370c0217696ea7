//! Handlers for the `/categories` resource.
//!
//! Validation happens here, before anything reaches the store: create and
//! update both require a non-empty `name`, and update/delete confirm the row
//! exists first.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::models::category::{Category, CategoryInput};
use storefront_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Category";

/// Load a category or fail with the `"... with ID - {id}"` 404.
async fn ensure_category_exists(state: &AppState, id: DbId) -> AppResult<Category> {
    state
        .categories
        .get(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.categories.list().await?;
    Ok(Json(categories))
}

// ---------------------------------------------------------------------------
// GET /categories/{id}
// ---------------------------------------------------------------------------

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = ensure_category_exists(&state, id).await?;
    Ok(Json(category))
}

// ---------------------------------------------------------------------------
// POST /categories
// ---------------------------------------------------------------------------

/// Create a category. Any `id` in the body is discarded; the store assigns one.
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> AppResult<Json<Category>> {
    let Json(input) = payload?;
    let category = input.into_new()?;

    let created = state.categories.save(category).await?;
    tracing::info!(category_id = created.id, name = %created.name, "Category created");

    Ok(Json(created))
}

// ---------------------------------------------------------------------------
// PUT /categories/{id}
// ---------------------------------------------------------------------------

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> AppResult<Json<Category>> {
    let Json(input) = payload?;

    let mut category = state
        .categories
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{ENTITY} not found with ID: {id}")))?;
    category.apply(&input)?;

    let updated = state.categories.save(category).await?;
    tracing::info!(category_id = id, name = %updated.name, "Category updated");

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /categories/{id}
// ---------------------------------------------------------------------------

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<String> {
    ensure_category_exists(&state, id).await?;
    state.categories.delete(id).await?;

    tracing::info!(category_id = id, "Category deleted");

    Ok(format!("Deleted {ENTITY} with ID - {id}"))
}
