//! Repository for the `products` table.
//!
//! Every read joins `categories` so the returned product embeds its category.
//! Writes only store `category_id`; the `RETURNING` row is joined through a
//! CTE so save returns the same shape as a read.

use async_trait::async_trait;
use sqlx::FromRow;
use storefront_core::error::StoreError;
use storefront_core::models::category::Category;
use storefront_core::models::product::Product;
use storefront_core::store::ProductStore;
use storefront_core::types::{DbId, UNASSIGNED_ID};

use crate::{classify_sqlx_error, DbPool};

/// Columns written back by insert/update.
const RETURNING: &str = "id, name, price, category_id";

/// Select list over a product row aliased `p` joined to category `c`.
const JOINED_COLUMNS: &str = "p.id, p.name, p.price, p.category_id, c.name AS category_name";

#[derive(Debug, FromRow)]
struct ProductRow {
    id: DbId,
    name: String,
    price: f64,
    category_id: Option<DbId>,
    category_name: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let category = match (row.category_id, row.category_name) {
            (Some(id), Some(name)) => Some(Category { id, name }),
            _ => None,
        };
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            category,
        }
    }
}

/// Provides store access for products.
#[derive(Debug, Clone)]
pub struct ProductRepo {
    pool: DbPool,
}

impl ProductRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepo {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM products p
             LEFT JOIN categories c ON c.id = p.category_id
             ORDER BY p.id ASC"
        );
        let rows = sqlx::query_as::<_, ProductRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, StoreError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM products p
             LEFT JOIN categories c ON c.id = p.category_id
             WHERE p.id = $1"
        );
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Product::from))
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let category_id = product.category.as_ref().map(|c| c.id);

        let row = if product.id == UNASSIGNED_ID {
            let query = format!(
                "WITH p AS (
                    INSERT INTO products (name, price, category_id)
                    VALUES ($1, $2, $3)
                    RETURNING {RETURNING}
                 )
                 SELECT {JOINED_COLUMNS}
                 FROM p LEFT JOIN categories c ON c.id = p.category_id"
            );
            sqlx::query_as::<_, ProductRow>(&query)
                .bind(&product.name)
                .bind(product.price)
                .bind(category_id)
                .fetch_one(&self.pool)
                .await
        } else {
            let query = format!(
                "WITH p AS (
                    UPDATE products SET name = $2, price = $3, category_id = $4
                    WHERE id = $1
                    RETURNING {RETURNING}
                 )
                 SELECT {JOINED_COLUMNS}
                 FROM p LEFT JOIN categories c ON c.id = p.category_id"
            );
            sqlx::query_as::<_, ProductRow>(&query)
                .bind(product.id)
                .bind(&product.name)
                .bind(product.price)
                .bind(category_id)
                .fetch_one(&self.pool)
                .await
        };
        row.map(Product::from).map_err(classify_sqlx_error)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(())
    }
}
