//! Category repository implementation.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::instrument;

use trivia_application::{ApplicationResult, CategoryRepositoryPort};
use trivia_domain::{Category, CategoryId};

use crate::Error;

/// PostgreSQL implementation of the category port.
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_category(row: PgRow) -> Category {
    Category {
        id: CategoryId::new(row.get("id")),
        kind: row.get("type"),
    }
}

#[async_trait]
impl CategoryRepositoryPort for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> ApplicationResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(rows.into_iter().map(row_to_category).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: CategoryId) -> ApplicationResult<Option<Category>> {
        let row = sqlx::query("SELECT id, type FROM categories WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.map(row_to_category))
    }
}
