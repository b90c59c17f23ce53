//! Category handlers

use crate::{api::extractors::{parse_path_id, Page}, state::AppState, Result};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use super::success;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let listing = state.catalog.list_categories().await?;
    Ok(success(listing))
}

/// GET /categories/{category_id}/questions?page=N
pub async fn category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Page(page): Page,
) -> Result<impl IntoResponse> {
    let category_id = parse_path_id(&category_id)?;
    let questions = state.catalog.questions_by_category(category_id, page).await?;
    Ok(success(questions))
}
