//! Infrastructure layer for the trivia API
//!
//! This crate provides the storage adapters behind the application ports:
//! - Database access (PostgreSQL with sqlx) and schema migrations
//! - PostgreSQL repositories for questions and categories
//! - An in-memory store used when no database is configured, and in tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trivia_infrastructure::{DatabasePool, PgCategoryRepository, PgQuestionRepository};
//!
//! let pool = DatabasePool::new(&config.database).await?;
//! pool.migrate().await?;
//!
//! let questions = PgQuestionRepository::new(pool.pool().clone());
//! let categories = PgCategoryRepository::new(pool.pool().clone());
//! ```

pub mod database;
pub mod repositories;

pub use database::{DatabasePool, HealthStatus};
pub use repositories::{InMemoryTriviaStore, PgCategoryRepository, PgQuestionRepository};

use trivia_application::ApplicationError;

pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure-level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database errors from sqlx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration errors
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<Error> for ApplicationError {
    fn from(err: Error) -> Self {
        tracing::error!(error = %err, "Storage failure");
        ApplicationError::Internal(err.to_string())
    }
}
