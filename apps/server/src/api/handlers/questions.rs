//! Question listing, creation and deletion

use crate::{
    api::extractors::{parse_path_id, JsonBody, Page},
    state::AppState,
    Result,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use super::success;

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    Page(page): Page,
) -> Result<impl IntoResponse> {
    let page = state.catalog.list_questions(page).await?;
    Ok(success(page))
}

/// POST /questions
///
/// Body: `{"question": "...", "answer": "...", "category": 1, "difficulty": 2}`
pub async fn create_question(
    State(state): State<AppState>,
    Page(page): Page,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse> {
    let created = state.catalog.create_question(&body, page).await?;
    Ok(success(created))
}

/// DELETE /questions/{question_id}
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    Page(page): Page,
) -> Result<impl IntoResponse> {
    // A non-numeric id names no route at all, so it is 404 rather than 422.
    let question_id = parse_path_id(&question_id)?;
    let deleted = state.catalog.delete_question(question_id, page).await?;
    Ok(success(deleted))
}
