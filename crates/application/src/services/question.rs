//! Question Service
//!
//! Listing, lookup, search, creation and deletion of trivia questions.
//! Empty listings and empty search results are reported as
//! [`ApplicationError::NotFound`], never as an empty success.

use super::{CategoryRepositoryPort, ServiceContext};
use crate::validation::{CreateQuestionRequest, SearchQuestionsRequest};
use crate::{ApplicationError, ApplicationResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use trivia_common::{PaginatedResult, PaginationParams};
use trivia_domain::{Category, CategoryId, CategoryLabels, NewQuestion, Question, QuestionId};

/// Question repository trait (to be implemented by infrastructure)
///
/// Every listing is ordered by question id ascending.
#[async_trait]
pub trait QuestionRepositoryPort: Send + Sync {
    /// One page of questions plus the size of the full set
    async fn list_page(
        &self,
        pagination: &PaginationParams,
    ) -> ApplicationResult<(Vec<Question>, u64)>;
    async fn list_all(&self) -> ApplicationResult<Vec<Question>>;
    async fn list_by_category(&self, category: CategoryId) -> ApplicationResult<Vec<Question>>;
    /// Questions whose text contains `term`, ignoring case
    async fn search(&self, term: &str) -> ApplicationResult<Vec<Question>>;
    async fn get_by_id(&self, id: QuestionId) -> ApplicationResult<Option<Question>>;
    async fn insert(&self, question: &NewQuestion) -> ApplicationResult<Question>;
    /// Returns `false` when no question had this id
    async fn delete(&self, id: QuestionId) -> ApplicationResult<bool>;
    async fn count(&self) -> ApplicationResult<u64>;
}

/// One page of the question listing
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub page: PaginatedResult<Question>,
    /// Every category
    pub categories: CategoryLabels,
    /// Categories of the questions on this page
    pub current_category: CategoryLabels,
}

/// Search hits with the categories they belong to
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub current_category: CategoryLabels,
}

/// Questions of one category
#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub category: Category,
    pub questions: Vec<Question>,
}

/// Question service implementation
#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionRepositoryPort>,
    categories: Arc<dyn CategoryRepositoryPort>,
}

impl QuestionService {
    pub fn new(
        questions: Arc<dyn QuestionRepositoryPort>,
        categories: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// List one page of questions
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn list_page(
        &self,
        ctx: &ServiceContext,
        pagination: PaginationParams,
    ) -> ApplicationResult<QuestionPage> {
        let (items, total) = self.questions.list_page(&pagination).await?;
        if items.is_empty() {
            debug!(page = pagination.page, "Requested page holds no questions");
            return Err(ApplicationError::NotFound(format!(
                "no questions on page {}",
                pagination.page
            )));
        }

        let categories = trivia_domain::labels(&self.categories.list_all().await?);
        let current_category = labels_for(&categories, &items);
        let page = PaginatedResult::new(items, pagination.page, pagination.per_page, total);

        Ok(QuestionPage {
            page,
            categories,
            current_category,
        })
    }

    /// Fetch a single question
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn get(&self, ctx: &ServiceContext, id: QuestionId) -> ApplicationResult<Question> {
        self.questions.get_by_id(id).await?.ok_or_else(|| {
            debug!(question_id = %id, "Question not found");
            ApplicationError::NotFound(format!("question {}", id))
        })
    }

    /// Create a question, returning it with the new size of the question set
    #[instrument(skip(self, ctx, request), fields(correlation_id = %ctx.correlation_id))]
    pub async fn create(
        &self,
        ctx: &ServiceContext,
        request: CreateQuestionRequest,
    ) -> ApplicationResult<(Question, u64)> {
        let new_question = request.into_new_question()?;
        let question = self.questions.insert(&new_question).await?;
        let total = self.questions.count().await?;

        info!(
            question_id = %question.id,
            category = %question.category,
            "Question created"
        );

        Ok((question, total))
    }

    /// Delete a question by id
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn delete(&self, ctx: &ServiceContext, id: QuestionId) -> ApplicationResult<QuestionId> {
        if !self.questions.delete(id).await? {
            debug!(question_id = %id, "Delete of unknown question");
            return Err(ApplicationError::NotFound(format!("question {}", id)));
        }

        info!(question_id = %id, "Question deleted");
        Ok(id)
    }

    /// Case-insensitive substring search over question text
    #[instrument(skip(self, ctx, request), fields(correlation_id = %ctx.correlation_id))]
    pub async fn search(
        &self,
        ctx: &ServiceContext,
        request: SearchQuestionsRequest,
    ) -> ApplicationResult<SearchResults> {
        let term = request.into_term()?;
        let questions = self.questions.search(&term).await?;
        if questions.is_empty() {
            debug!(term = %term, "Search matched nothing");
            return Err(ApplicationError::NotFound(format!(
                "no questions matching {:?}",
                term
            )));
        }

        let categories = trivia_domain::labels(&self.categories.list_all().await?);
        let current_category = labels_for(&categories, &questions);

        Ok(SearchResults {
            questions,
            current_category,
        })
    }

    /// Questions of an existing category; an empty list is a valid result
    #[instrument(skip(self, ctx), fields(correlation_id = %ctx.correlation_id))]
    pub async fn by_category(
        &self,
        ctx: &ServiceContext,
        category_id: CategoryId,
    ) -> ApplicationResult<CategoryQuestions> {
        let category = self
            .categories
            .get_by_id(category_id)
            .await?
            .ok_or_else(|| {
                debug!(category_id = %category_id, "Category not found");
                ApplicationError::NotFound(format!("category {}", category_id))
            })?;

        let questions = self.questions.list_by_category(category.id).await?;

        Ok(CategoryQuestions {
            category,
            questions,
        })
    }
}

/// Labels of the categories referenced by `questions`
///
/// Questions pointing at a category that does not exist are skipped.
fn labels_for(all: &CategoryLabels, questions: &[Question]) -> CategoryLabels {
    questions
        .iter()
        .filter_map(|q| all.get(&q.category).map(|kind| (q.category, kind.clone())))
        .collect()
}
