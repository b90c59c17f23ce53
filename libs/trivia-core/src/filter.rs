//! Category filtering

use crate::models::Question;

/// Questions whose category equals `category_id` exactly.
pub fn filter_by_category(category_id: i64, corpus: &[Question]) -> Vec<&Question> {
    corpus.iter().filter(|q| q.category == category_id).collect()
}
