//! Storage port for the trivia catalog

use crate::{
    error::StoreResult,
    models::{Category, NewQuestion, Question},
};
use async_trait::async_trait;

/// Data access consumed by [`crate::CatalogService`].
///
/// Any backend (PostgreSQL, in-memory, remote) can implement this trait.
/// Listings are always ordered by ascending id so that paging is stable
/// regardless of the backing store.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All categories, ascending by id
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Look up a single category
    ///
    /// # Returns
    /// * `Ok(Some(category))` - Category exists
    /// * `Ok(None)` - No category with this id
    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// All questions, ascending by id
    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    /// Look up a single question
    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Insert a question and return it with its assigned id
    ///
    /// # Errors
    /// * `Rejected` - A required field is missing or invalid
    async fn insert_question(&self, fields: NewQuestion) -> StoreResult<Question>;

    /// Remove a question
    ///
    /// # Errors
    /// * `MissingRecord` - No question with this id
    async fn delete_question(&self, id: i64) -> StoreResult<()>;
}
