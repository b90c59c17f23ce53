//! Question search

use crate::{api::extractors::{JsonBody, Page}, state::AppState, Result};
use axum::{extract::State, response::IntoResponse};
use trivia_core::search_term;

use super::success;

/// POST /search and POST /questions/search
///
/// Body: `{"search": "term"}`. A missing term matches every question.
pub async fn search_questions(
    State(state): State<AppState>,
    Page(page): Page,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse> {
    let term = search_term(&body);
    tracing::debug!(term = %term, "Searching questions");

    let results = state.catalog.search_questions(&term, page).await?;
    Ok(success(results))
}
