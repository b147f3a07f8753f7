//! Quiz Service
//!
//! Serves one unseen question per call. The history of served questions is
//! held by the client and sent with each request; the service keeps no
//! per-player state.

use super::{CategoryRepositoryPort, QuestionRepositoryPort, ServiceContext};
use crate::quiz::{candidate_pool, pick_question};
use crate::validation::QuizRequest;
use crate::{ApplicationError, ApplicationResult};
use parking_lot::Mutex;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use trivia_domain::Question;

pub struct QuizService {
    questions: Arc<dyn QuestionRepositoryPort>,
    categories: Arc<dyn CategoryRepositoryPort>,
    rng: Mutex<StdRng>,
}

impl QuizService {
    /// Create a quiz service; a seed makes selection reproducible
    pub fn new(
        questions: Arc<dyn QuestionRepositoryPort>,
        categories: Arc<dyn CategoryRepositoryPort>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            questions,
            categories,
            rng: Mutex::new(rng),
        }
    }

    /// Pick a random question the player has not been served yet
    #[instrument(skip(self, ctx, request), fields(correlation_id = %ctx.correlation_id))]
    pub async fn next_question(
        &self,
        ctx: &ServiceContext,
        request: QuizRequest,
    ) -> ApplicationResult<Question> {
        let category = request.category();
        let previous = request.previous();

        let questions = if category.is_all() {
            self.questions.list_all().await?
        } else {
            if self.categories.get_by_id(category).await?.is_none() {
                debug!(category_id = %category, "Quiz requested for unknown category");
                return Err(ApplicationError::Unprocessable(format!(
                    "unknown category {}",
                    category
                )));
            }
            self.questions.list_by_category(category).await?
        };

        let pool = candidate_pool(questions, &previous);
        let picked = {
            let mut rng = self.rng.lock();
            pick_question(pool, &mut *rng)
        };

        match picked {
            Some(question) => {
                info!(
                    question_id = %question.id,
                    category_id = %category,
                    previously_served = previous.len(),
                    "Quiz question served"
                );
                Ok(question)
            }
            None => {
                debug!(category_id = %category, "Quiz pool exhausted");
                Err(ApplicationError::Unprocessable(
                    "no unseen questions left".to_string(),
                ))
            }
        }
    }
}
