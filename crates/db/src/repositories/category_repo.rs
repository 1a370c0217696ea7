//! Repository for the `categories` table.

use async_trait::async_trait;
use sqlx::FromRow;
use storefront_core::error::StoreError;
use storefront_core::models::category::Category;
use storefront_core::store::CategoryStore;
use storefront_core::types::{DbId, UNASSIGNED_ID};

use crate::{classify_sqlx_error, DbPool};

/// Column list for categories queries.
const COLUMNS: &str = "id, name";

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: DbId,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// Provides store access for categories.
#[derive(Debug, Clone)]
pub struct CategoryRepo {
    pool: DbPool,
}

impl CategoryRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepo {
    async fn find_all(&self) -> Result<Vec<Category>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        let rows = sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Category::from))
    }

    async fn save(&self, category: Category) -> Result<Category, StoreError> {
        let row = if category.id == UNASSIGNED_ID {
            let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
            sqlx::query_as::<_, CategoryRow>(&query)
                .bind(&category.name)
                .fetch_one(&self.pool)
                .await
        } else {
            let query =
                format!("UPDATE categories SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
            sqlx::query_as::<_, CategoryRow>(&query)
                .bind(category.id)
                .bind(&category.name)
                .fetch_one(&self.pool)
                .await
        };
        row.map(Category::from).map_err(classify_sqlx_error)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(())
    }
}
