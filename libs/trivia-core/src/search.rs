//! Case-insensitive substring search over question text

use crate::models::Question;

/// Every question whose text contains `term`, ignoring case.
///
/// Corpus order is preserved. An empty term matches every question.
pub fn search<'a>(term: &str, corpus: &'a [Question]) -> Vec<&'a Question> {
    let needle = term.to_lowercase();
    corpus
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}
