//! Trivia catalog routes
//!
//! Routes whose path matches but whose method does not answer 405; the
//! envelope middleware turns that into the JSON failure body.

use crate::api::handlers::{categories, questions, quizzes, search};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn trivia_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(categories::category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        // Exact path, matched ahead of the parameterized one below.
        .route("/questions/search", post(search::search_questions))
        .route("/questions/:question_id", delete(questions::delete_question))
        .route("/search", post(search::search_questions))
        .route("/quizzes", post(quizzes::next_quiz_question))
}
