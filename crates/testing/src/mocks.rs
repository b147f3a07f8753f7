//! Mock implementations of the repository ports.
//!
//! Provides in-memory mocks for service tests without a database, plus a
//! repository that fails every call for exercising storage-error paths.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;
use trivia_application::{
    ApplicationError, ApplicationResult, CategoryRepositoryPort, QuestionRepositoryPort,
};
use trivia_common::PaginationParams;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

use crate::fixtures;

/// Mock question repository for testing
pub struct MockQuestionRepository {
    questions: Arc<RwLock<BTreeMap<QuestionId, Question>>>,
    next_id: AtomicI32,
    inserts: AtomicUsize,
}

impl MockQuestionRepository {
    pub fn new() -> Self {
        Self::with_questions(Vec::new())
    }

    /// Repository holding the fixture questions
    pub fn seeded() -> Self {
        Self::with_questions(fixtures::questions())
    }

    pub fn with_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let questions: BTreeMap<QuestionId, Question> =
            questions.into_iter().map(|q| (q.id, q)).collect();
        let next_id = questions.keys().next_back().map_or(1, |id| id.value() + 1);

        Self {
            questions: Arc::new(RwLock::new(questions)),
            next_id: AtomicI32::new(next_id),
            inserts: AtomicUsize::new(0),
        }
    }

    /// Number of successful inserts
    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.read().contains_key(&id)
    }

    fn filtered(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        self.questions
            .read()
            .values()
            .filter(|q| keep(q))
            .cloned()
            .collect()
    }
}

impl Default for MockQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepositoryPort for MockQuestionRepository {
    async fn list_page(
        &self,
        pagination: &PaginationParams,
    ) -> ApplicationResult<(Vec<Question>, u64)> {
        let all = self.filtered(|_| true);
        Ok((pagination.slice(&all).to_vec(), all.len() as u64))
    }

    async fn list_all(&self) -> ApplicationResult<Vec<Question>> {
        Ok(self.filtered(|_| true))
    }

    async fn list_by_category(&self, category: CategoryId) -> ApplicationResult<Vec<Question>> {
        Ok(self.filtered(|q| q.category == category))
    }

    async fn search(&self, term: &str) -> ApplicationResult<Vec<Question>> {
        Ok(self.filtered(|q| q.matches(term)))
    }

    async fn get_by_id(&self, id: QuestionId) -> ApplicationResult<Option<Question>> {
        Ok(self.questions.read().get(&id).cloned())
    }

    async fn insert(&self, question: &NewQuestion) -> ApplicationResult<Question> {
        // Ids are never reused, matching a SERIAL column
        let mut questions = self.questions.write();
        let next = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = question.clone().with_id(QuestionId::new(next));
        questions.insert(stored.id, stored.clone());
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(stored)
    }

    async fn delete(&self, id: QuestionId) -> ApplicationResult<bool> {
        Ok(self.questions.write().remove(&id).is_some())
    }

    async fn count(&self) -> ApplicationResult<u64> {
        Ok(self.questions.read().len() as u64)
    }
}

/// Mock category repository for testing
pub struct MockCategoryRepository {
    categories: Vec<Category>,
}

impl MockCategoryRepository {
    pub fn new(mut categories: Vec<Category>) -> Self {
        categories.sort_by_key(|c| c.id);
        Self { categories }
    }

    /// Repository holding the six fixture categories
    pub fn seeded() -> Self {
        Self::new(fixtures::categories())
    }
}

#[async_trait]
impl CategoryRepositoryPort for MockCategoryRepository {
    async fn list_all(&self) -> ApplicationResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn get_by_id(&self, id: CategoryId) -> ApplicationResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }
}

/// Repository whose every call fails with a storage error
#[derive(Debug, Clone, Default)]
pub struct FailingRepository;

impl FailingRepository {
    fn failure<T>() -> ApplicationResult<T> {
        Err(ApplicationError::Internal(
            "connection refused".to_string(),
        ))
    }
}

#[async_trait]
impl QuestionRepositoryPort for FailingRepository {
    async fn list_page(&self, _: &PaginationParams) -> ApplicationResult<(Vec<Question>, u64)> {
        Self::failure()
    }

    async fn list_all(&self) -> ApplicationResult<Vec<Question>> {
        Self::failure()
    }

    async fn list_by_category(&self, _: CategoryId) -> ApplicationResult<Vec<Question>> {
        Self::failure()
    }

    async fn search(&self, _: &str) -> ApplicationResult<Vec<Question>> {
        Self::failure()
    }

    async fn get_by_id(&self, _: QuestionId) -> ApplicationResult<Option<Question>> {
        Self::failure()
    }

    async fn insert(&self, _: &NewQuestion) -> ApplicationResult<Question> {
        Self::failure()
    }

    async fn delete(&self, _: QuestionId) -> ApplicationResult<bool> {
        Self::failure()
    }

    async fn count(&self) -> ApplicationResult<u64> {
        Self::failure()
    }
}

#[async_trait]
impl CategoryRepositoryPort for FailingRepository {
    async fn list_all(&self) -> ApplicationResult<Vec<Category>> {
        Self::failure()
    }

    async fn get_by_id(&self, _: CategoryId) -> ApplicationResult<Option<Category>> {
        Self::failure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_question_repository_insert_assigns_next_id() {
        let repo = MockQuestionRepository::seeded();
        let created = repo
            .insert(&fixtures::create_test_new_question(2))
            .await
            .unwrap();

        assert_eq!(created.id, QuestionId::new(24));
        assert!(repo.contains(created.id));
        assert_eq!(repo.insert_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_question_repository_never_reuses_ids() {
        let repo = MockQuestionRepository::seeded();
        assert!(repo.delete(QuestionId::new(23)).await.unwrap());

        let created = repo
            .insert(&fixtures::create_test_new_question(4))
            .await
            .unwrap();
        assert_eq!(created.id, QuestionId::new(24));

        assert!(repo.delete(created.id).await.unwrap());
        let again = repo
            .insert(&fixtures::create_test_new_question(4))
            .await
            .unwrap();
        assert_eq!(again.id, QuestionId::new(25));
    }

    #[tokio::test]
    async fn test_failing_repository() {
        let repo = FailingRepository;
        let err = QuestionRepositoryPort::count(&repo).await.unwrap_err();
        assert_eq!(err.http_status(), 500);
        assert!(CategoryRepositoryPort::list_all(&repo).await.is_err());
    }
}
