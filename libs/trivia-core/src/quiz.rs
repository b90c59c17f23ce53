//! Random quiz question selection

use crate::{filter::filter_by_category, models::Question};
use rand::Rng;
use std::collections::HashSet;

/// Source of uniformly distributed indices.
///
/// Injected into the selector so tests can reproduce a draw.
pub trait RandomIndex: Send + Sync {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Draws from the thread-local generator; calls share no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomIndex for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same position (wrapped to the pool size).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIndex(pub usize);

impl RandomIndex for FixedIndex {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Id(i64),
}

impl QuizCategory {
    /// Decode a requested category id, where `all_id` stands for every category.
    pub fn from_id(id: i64, all_id: i64) -> Self {
        if id == all_id {
            QuizCategory::All
        } else {
            QuizCategory::Id(id)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Question(Question),
    /// Every candidate has already been served.
    Exhausted,
}

/// Pick one unseen question from the candidate pool.
pub fn next_question(
    category: QuizCategory,
    excluded: &HashSet<i64>,
    corpus: &[Question],
    rng: &dyn RandomIndex,
) -> QuizOutcome {
    let pool: Vec<&Question> = match category {
        QuizCategory::All => corpus.iter().collect(),
        QuizCategory::Id(id) => filter_by_category(id, corpus),
    };
    let candidates: Vec<&Question> = pool
        .into_iter()
        .filter(|q| !excluded.contains(&q.id))
        .collect();

    if candidates.is_empty() {
        return QuizOutcome::Exhausted;
    }

    let index = rng.pick(candidates.len()).min(candidates.len() - 1);
    QuizOutcome::Question(candidates[index].clone())
}
