use async_trait::async_trait;
use storefront_core::error::StoreError;
use storefront_core::store::StoreHealth;

use crate::{classify_sqlx_error, health_check, DbPool};

/// Database liveness probe used by `GET /health`.
#[derive(Debug, Clone)]
pub struct PgHealth {
    pool: DbPool,
}

impl PgHealth {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PgHealth {
    async fn ping(&self) -> Result<(), StoreError> {
        health_check(&self.pool).await.map_err(classify_sqlx_error)
    }
}
