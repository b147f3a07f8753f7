//! Trivia question types.

use crate::identifiers::{CategoryId, QuestionId};
use serde::{Deserialize, Serialize};

/// A stored trivia question
///
/// Serializes to the flat shape clients render directly:
/// `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl Question {
    /// Case-insensitive containment of `term` in the question text
    pub fn matches(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }

    /// Whether this question belongs to `category`
    ///
    /// The "every category" sentinel matches all questions.
    pub fn in_category(&self, category: CategoryId) -> bool {
        category.is_all() || self.category == category
    }
}

/// A question that has not been stored yet
///
/// Storage assigns the identifier on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attach a storage-assigned identifier
    pub fn with_id(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
