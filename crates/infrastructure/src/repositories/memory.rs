//! In-memory trivia store.
//!
//! Backs both repository ports with a single lock-protected map. Used when no
//! database URL is configured and by the HTTP integration tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use trivia_application::{ApplicationResult, CategoryRepositoryPort, QuestionRepositoryPort};
use trivia_common::PaginationParams;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Categories every fresh store starts with.
pub const DEFAULT_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

#[derive(Default)]
struct StoreState {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_id: i32,
}

/// Question and category storage held in process memory.
///
/// Cloning shares the underlying data. Ids are assigned sequentially and are
/// never reused after a delete.
#[derive(Clone, Default)]
pub struct InMemoryTriviaStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryTriviaStore {
    /// Empty store without categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the six standard categories and no questions
    pub fn with_default_categories() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|&(id, kind)| Category::new(id, kind));
        Self::with_data(categories, Vec::new())
    }

    /// Store seeded with the given rows; question ids are kept as given
    pub fn with_data(
        categories: impl IntoIterator<Item = Category>,
        questions: impl IntoIterator<Item = Question>,
    ) -> Self {
        let questions: BTreeMap<QuestionId, Question> =
            questions.into_iter().map(|q| (q.id, q)).collect();
        let next_id = questions.keys().next_back().map_or(1, |id| id.value() + 1);

        let state = StoreState {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions,
            next_id,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

#[async_trait]
impl CategoryRepositoryPort for InMemoryTriviaStore {
    async fn list_all(&self) -> ApplicationResult<Vec<Category>> {
        Ok(self.state.read().categories.values().cloned().collect())
    }

    async fn get_by_id(&self, id: CategoryId) -> ApplicationResult<Option<Category>> {
        Ok(self.state.read().categories.get(&id).cloned())
    }
}

#[async_trait]
impl QuestionRepositoryPort for InMemoryTriviaStore {
    async fn list_page(
        &self,
        pagination: &PaginationParams,
    ) -> ApplicationResult<(Vec<Question>, u64)> {
        let state = self.state.read();
        let items = state
            .questions
            .values()
            .skip(pagination.offset())
            .take(pagination.limit())
            .cloned()
            .collect();
        Ok((items, state.questions.len() as u64))
    }

    async fn list_all(&self) -> ApplicationResult<Vec<Question>> {
        Ok(self.state.read().questions.values().cloned().collect())
    }

    async fn list_by_category(&self, category: CategoryId) -> ApplicationResult<Vec<Question>> {
        Ok(self
            .state
            .read()
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> ApplicationResult<Vec<Question>> {
        Ok(self
            .state
            .read()
            .questions
            .values()
            .filter(|q| q.matches(term))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: QuestionId) -> ApplicationResult<Option<Question>> {
        Ok(self.state.read().questions.get(&id).cloned())
    }

    async fn insert(&self, question: &NewQuestion) -> ApplicationResult<Question> {
        let mut state = self.state.write();
        let id = QuestionId::new(state.next_id);
        state.next_id += 1;

        let stored = question.clone().with_id(id);
        state.questions.insert(id, stored.clone());
        debug!(question_id = %id, "Question stored in memory");
        Ok(stored)
    }

    async fn delete(&self, id: QuestionId) -> ApplicationResult<bool> {
        Ok(self.state.write().questions.remove(&id).is_some())
    }

    async fn count(&self) -> ApplicationResult<u64> {
        Ok(self.state.read().questions.len() as u64)
    }
}
