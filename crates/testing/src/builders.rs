//! Fluent builder pattern for constructing test data.

use fake::{faker::lorem::en::Sentence, faker::lorem::en::Word, Fake};
use trivia_application::{CreateQuestionRequest, QuizRequest};
use trivia_domain::{CategoryId, NewQuestion, Question, QuestionId};

/// Builder for creating Question test instances
///
/// Unset fields get random but valid values.
#[derive(Clone)]
pub struct QuestionBuilder {
    id: QuestionId,
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: i32,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        Self {
            id: QuestionId::new((1000..100_000).fake()),
            question: format!("{}?", Sentence(4..9).fake::<String>().trim_end_matches('.')),
            answer: Word().fake(),
            category: CategoryId::new((1..=6).fake()),
            difficulty: (1..=5).fake(),
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = QuestionId::new(id);
        self
    }

    pub fn with_text(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    pub fn with_category(mut self, category: i32) -> Self {
        self.category = CategoryId::new(category);
        self
    }

    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn build(self) -> Question {
        self.build_new().with_id(self.id)
    }

    /// Build without an id, as submitted for creation
    pub fn build_new(&self) -> NewQuestion {
        NewQuestion {
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }

    /// Build a complete create request
    pub fn build_request(&self) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: Some(self.question.clone()),
            answer: Some(self.answer.clone()),
            difficulty: Some(self.difficulty),
            category: Some(self.category),
        }
    }
}

impl Default for QuestionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for quiz requests
#[derive(Clone, Default)]
pub struct QuizRequestBuilder {
    category: Option<i32>,
    previous: Vec<i32>,
}

impl QuizRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_category(mut self, category: i32) -> Self {
        self.category = Some(category);
        self
    }

    pub fn seen(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.previous.extend(ids);
        self
    }

    pub fn build(self) -> QuizRequest {
        QuizRequest::new(
            self.category.map_or(CategoryId::ALL, CategoryId::new),
            self.previous.into_iter().map(QuestionId::new),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_builder_overrides() {
        let question = QuestionBuilder::new()
            .with_id(7)
            .with_text("Who discovered penicillin?")
            .with_answer("Alexander Fleming")
            .with_category(1)
            .with_difficulty(3)
            .build();

        assert_eq!(question.id, QuestionId::new(7));
        assert_eq!(question.answer, "Alexander Fleming");
        assert_eq!(question.difficulty, 3);
    }

    #[test]
    fn test_random_defaults_are_valid() {
        let request = QuestionBuilder::new().build_request();
        let new_question = request.into_new_question().unwrap();
        assert!((1..=6).contains(&new_question.category.value()));
    }

    #[test]
    fn test_quiz_request_builder() {
        let request = QuizRequestBuilder::new().in_category(3).seen([13, 14]).build();
        assert_eq!(request.category(), CategoryId::new(3));
        assert_eq!(request.previous().len(), 2);

        assert!(QuizRequestBuilder::new().build().category().is_all());
    }
}
