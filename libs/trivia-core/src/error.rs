//! Error types for the trivia catalog

use thiserror::Error;

/// Outcome kinds surfaced by the catalog operations.
///
/// The message is for logs only; callers render a fixed text per kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by a [`crate::CatalogStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Record not found: {entity}/{id}")]
    MissingRecord { entity: &'static str, id: i64 },

    #[error("Record rejected: {0}")]
    Rejected(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
