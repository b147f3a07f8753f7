//! Question request validation

use super::{flexible_int, ValidatorExt};
use crate::{ApplicationError, ApplicationResult};
use serde::{Deserialize, Serialize};
use trivia_domain::{CategoryId, NewQuestion};
use validator::Validate;

/// Create question request
///
/// All four fields are required. Each one is checked on its own, so a payload
/// missing any single field is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub question: Option<String>,

    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "flexible_int")]
    #[validate(required)]
    pub difficulty: Option<i32>,

    #[serde(default, deserialize_with = "flexible_int")]
    #[validate(required)]
    pub category: Option<CategoryId>,
}

impl CreateQuestionRequest {
    /// Validate the request and convert it into an unsaved question
    pub fn into_new_question(self) -> ApplicationResult<NewQuestion> {
        self.to_validation_result().ensure_valid()?;

        match (self.question, self.answer, self.difficulty, self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => Ok(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => Err(ApplicationError::Unprocessable(
                "question, answer, difficulty and category are required".to_string(),
            )),
        }
    }
}

/// Search request, `{"searchTerm": "..."}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm", alias = "search_term")]
    #[validate(required)]
    pub search_term: Option<String>,
}

impl SearchQuestionsRequest {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
        }
    }

    /// Validate the request and return the search term
    pub fn into_term(self) -> ApplicationResult<String> {
        self.to_validation_result().ensure_valid()?;
        self.search_term
            .ok_or_else(|| ApplicationError::Unprocessable("searchTerm: required".to_string()))
    }
}
