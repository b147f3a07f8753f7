//! Application state and dependency injection.
//!
//! This module defines the shared application state that is passed
//! to all route handlers via Axum's state extraction.

use std::sync::Arc;
use trivia_application::{
    CategoryRepositoryPort, CategoryService, QuestionRepositoryPort, QuestionService, QuizService,
};
use trivia_common::AppConfig;
use trivia_infrastructure::{
    DatabasePool, InMemoryTriviaStore, PgCategoryRepository, PgQuestionRepository,
};

/// Storage backing the repositories
#[derive(Clone, Debug)]
pub enum Storage {
    /// Process-local store
    Memory,
    /// PostgreSQL pool
    Postgres(DatabasePool),
}

impl Storage {
    /// Short backend name reported by the health endpoint
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Memory => "memory",
            Storage::Postgres(_) => "postgres",
        }
    }

    /// Whether the backend can serve queries
    pub async fn is_ready(&self) -> bool {
        match self {
            Storage::Memory => true,
            Storage::Postgres(pool) => pool.health_check().await.healthy,
        }
    }
}

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<AppConfig>,

    /// Category listing
    pub categories: CategoryService,

    /// Question listing, search, create and delete
    pub questions: QuestionService,

    /// Quiz question selection
    pub quiz: Arc<QuizService>,

    /// Storage backend, for readiness checks
    pub storage: Storage,
}

impl AppState {
    /// Wire the services over the given repositories
    pub fn new(
        config: AppConfig,
        questions: Arc<dyn QuestionRepositoryPort>,
        categories: Arc<dyn CategoryRepositoryPort>,
        storage: Storage,
    ) -> Self {
        let quiz = QuizService::new(
            Arc::clone(&questions),
            Arc::clone(&categories),
            config.quiz.seed,
        );

        Self {
            categories: CategoryService::new(Arc::clone(&categories)),
            questions: QuestionService::new(questions, categories),
            quiz: Arc::new(quiz),
            storage,
            config: Arc::new(config),
        }
    }

    /// State backed by an in-memory store
    pub fn in_memory(config: AppConfig, store: InMemoryTriviaStore) -> Self {
        let store = Arc::new(store);
        Self::new(config, store.clone(), store, Storage::Memory)
    }

    /// State backed by PostgreSQL
    pub fn postgres(config: AppConfig, pool: DatabasePool) -> Self {
        let questions = Arc::new(PgQuestionRepository::new(pool.pool().clone()));
        let categories = Arc::new(PgCategoryRepository::new(pool.pool().clone()));
        Self::new(config, questions, categories, Storage::Postgres(pool))
    }
}
