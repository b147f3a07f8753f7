//! Quiz question selection.
//!
//! A quiz round draws one question the player has not seen yet, uniformly at
//! random from the requested category. Selection never runs on an empty pool:
//! an exhausted pool is reported as `None`.

use rand::Rng;
use std::collections::HashSet;
use trivia_domain::{Question, QuestionId};

/// Questions from `questions` whose id is not in `previous`
pub fn candidate_pool(questions: Vec<Question>, previous: &HashSet<QuestionId>) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect()
}

/// Pick one candidate uniformly at random, `None` when the pool is empty.
pub fn pick_question<R>(mut candidates: Vec<Question>, rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
