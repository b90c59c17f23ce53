//! Error types for the trivia server
//!
//! Every failure is rendered as the fixed envelope
//! `{"success": false, "error": <status>, "message": <text>}`; the detailed
//! cause is only logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] trivia_core::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Catalog(trivia_core::Error::NotFound(_)) | Error::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Error::Catalog(trivia_core::Error::Unprocessable(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::Catalog(trivia_core::Error::BadRequest(_)) | Error::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Error::Database(_) | Error::Migration(_) | Error::Internal(_) | Error::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Internal error");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request failed");
        }
        envelope(status)
    }
}

/// Fixed client-facing text for a failure status.
pub fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}

/// Build the failure envelope for `status`.
pub fn envelope(status: StatusCode) -> Response {
    let body = Json(json!({
        "success": false,
        "error": status.as_u16(),
        "message": status_message(status),
    }));
    (status, body).into_response()
}
