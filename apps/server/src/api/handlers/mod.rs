//! Request handlers for the catalog endpoints
//!
//! Handlers extract the request, call the catalog service and wrap the result
//! in the success envelope. Failures are rendered by [`crate::Error`].

pub mod categories;
pub mod questions;
pub mod quizzes;
pub mod search;

use axum::Json;
use serde::Serialize;

pub use categories::*;
pub use questions::*;
pub use quizzes::*;
pub use search::*;

/// `{"success": true, ...payload}`
#[derive(Debug, Serialize)]
pub struct Success<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

pub(crate) fn success<T: Serialize>(payload: T) -> Json<Success<T>> {
    Json(Success {
        success: true,
        payload,
    })
}
