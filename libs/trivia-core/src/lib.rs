//! Trivia catalog core
//!
//! The selection logic that sits between stored questions/categories and the
//! HTTP surface:
//! - Page windowing over ordered results
//! - Case-insensitive substring search
//! - Category filtering
//! - Random quiz selection with exclusion of already-served questions
//!
//! Storage is reached through the [`CatalogStore`] port; [`CatalogService`]
//! composes everything into the observable catalog operations.

pub mod error;
pub mod filter;
pub mod memory;
pub mod models;
pub mod paging;
pub mod quiz;
pub mod search;
pub mod service;
pub mod store;

pub use error::{Error, Result, StoreError};
pub use memory::InMemoryStore;
pub use models::{Category, CategoryMap, NewQuestion, Question, QuestionView};
pub use paging::{paginate, PageQuery, DEFAULT_PAGE_SIZE};
pub use quiz::{FixedIndex, QuizCategory, QuizOutcome, RandomIndex, ThreadRandom};
pub use service::{
    search_term, CatalogOptions, CatalogService, CategoryListing, CategoryQuestions,
    CreatedQuestion, DeletedQuestion, QuestionPage, QuizQuestion, SearchResults,
};
pub use store::CatalogStore;
