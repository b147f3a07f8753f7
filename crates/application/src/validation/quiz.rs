//! Quiz request validation

use super::flexible_int;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use trivia_domain::{CategoryId, QuestionId};
use validator::Validate;

/// Category selector sent by quiz clients, `{"id": 3, "type": "Geography"}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "flexible_int")]
    pub id: Option<CategoryId>,

    /// Display label echoed back by clients; not used for lookups
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Quiz request
///
/// The served-question history lives on the client and is sent with every
/// call. Both camelCase and snake_case field names are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct QuizRequest {
    #[serde(default, rename = "previousQuestions", alias = "previous_questions")]
    pub previous_questions: Vec<QuestionId>,

    #[serde(default, rename = "quizCategory", alias = "quiz_category")]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    pub fn new(category: CategoryId, previous: impl IntoIterator<Item = QuestionId>) -> Self {
        Self {
            previous_questions: previous.into_iter().collect(),
            quiz_category: Some(QuizCategory {
                id: Some(category),
                kind: None,
            }),
        }
    }

    /// Requested category; a missing selector or id means every category
    pub fn category(&self) -> CategoryId {
        self.quiz_category
            .as_ref()
            .and_then(|c| c.id)
            .unwrap_or(CategoryId::ALL)
    }

    /// Previously served question ids
    pub fn previous(&self) -> HashSet<QuestionId> {
        self.previous_questions.iter().copied().collect()
    }
}
