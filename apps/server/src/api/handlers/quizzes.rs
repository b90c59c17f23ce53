//! Quiz play

use crate::{api::extractors::parse_json_body, state::AppState, Result};
use axum::{body::Bytes, extract::State, response::IntoResponse};

use super::success;

/// POST /quizzes
///
/// Body: `{"quiz_category": {"id": 0}, "previous_questions": [3, 9]}` where
/// category id `0` draws from every category.
pub async fn next_quiz_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    // Any malformed quiz request, including unparseable JSON, is unprocessable.
    let body = parse_json_body(&body)
        .map_err(|e| trivia_core::Error::Unprocessable(e.to_string()))?;

    let quiz = state.catalog.next_quiz_question(&body).await?;
    Ok(success(quiz))
}
