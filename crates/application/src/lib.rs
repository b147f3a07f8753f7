//! Application layer for the trivia API
//!
//! This crate holds the use cases: listing, searching, creating and deleting
//! questions, and serving quiz questions. Storage is reached only through the
//! repository ports defined in [`services`].
//!
//! ## Modules
//!
//! - `services` - Category, question and quiz services plus their repository ports
//! - `quiz` - Candidate filtering and random selection for quiz rounds
//! - `validation` - Request payloads and their validation rules

pub mod quiz;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use services::{
    CategoryQuestions, CategoryRepositoryPort, CategoryService, QuestionPage,
    QuestionRepositoryPort, QuestionService, QuizService, SearchResults, ServiceContext,
};
pub use validation::{CreateQuestionRequest, QuizRequest, SearchQuestionsRequest};

use thiserror::Error;

/// Application-level errors
///
/// Every failure a caller can observe is one of these four conditions, each
/// with exactly one HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Resource not found, or a listing that came back empty
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Request was well-formed but cannot be acted on
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Malformed input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Storage or other internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Get HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            ApplicationError::NotFound(_) => 404,
            ApplicationError::Unprocessable(_) => 422,
            ApplicationError::BadRequest(_) => 400,
            ApplicationError::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::NotFound(_) => "NOT_FOUND",
            ApplicationError::Unprocessable(_) => "UNPROCESSABLE",
            ApplicationError::BadRequest(_) => "BAD_REQUEST",
            ApplicationError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Detail message without the category prefix
    pub fn detail(&self) -> &str {
        match self {
            ApplicationError::NotFound(m)
            | ApplicationError::Unprocessable(m)
            | ApplicationError::BadRequest(m)
            | ApplicationError::Internal(m) => m,
        }
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
