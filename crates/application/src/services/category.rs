//! Category Service

use super::ServiceContext;
use crate::ApplicationResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};
use trivia_domain::{labels, Category, CategoryId, CategoryLabels};

/// Category repository trait (to be implemented by infrastructure)
#[async_trait]
pub trait CategoryRepositoryPort: Send + Sync {
    /// Every category, ordered by id ascending
    async fn list_all(&self) -> ApplicationResult<Vec<Category>>;
    async fn get_by_id(&self, id: CategoryId) -> ApplicationResult<Option<Category>>;
}

/// Read-only access to question categories
#[derive(Clone)]
pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryPort>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { repository }
    }

    /// All categories as an id → label map, in id order
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn labels(&self, ctx: &ServiceContext) -> ApplicationResult<CategoryLabels> {
        let categories = self.repository.list_all().await?;
        debug!(count = categories.len(), "Categories listed");
        Ok(labels(&categories))
    }
}
