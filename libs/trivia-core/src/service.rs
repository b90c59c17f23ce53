//! Catalog operations
//!
//! Each operation fetches fresh data through the [`CatalogStore`], applies
//! filtering/search, paging and formatting, and reports failures as exactly
//! one [`Error`] kind. The kind chosen per operation is part of the public
//! contract and differs between operations:
//! - listing and lookup failures are `NotFound`
//! - write failures and malformed quiz requests are `Unprocessable`
//!   (this includes deleting an id that does not exist)

use crate::{
    error::{Error, Result, StoreError},
    filter::filter_by_category,
    models::{category_map, CategoryMap, NewQuestion, Question, QuestionView},
    paging::{paginate, DEFAULT_PAGE_SIZE},
    quiz::{next_question, QuizCategory, QuizOutcome, RandomIndex, ThreadRandom},
    search::search,
    store::CatalogStore,
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::sync::Arc;
use validator::Validate;

/// Behavior switches for [`CatalogService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    pub page_size: usize,
    /// Quiz category id meaning "every category".
    pub quiz_all_category_id: i64,
    /// Reject incomplete create requests with `BadRequest` before they reach the store.
    pub validate_on_create: bool,
    /// Report an exhausted quiz as a successful empty result instead of `Unprocessable`.
    pub report_quiz_exhaustion: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            quiz_all_category_id: 0,
            validate_on_create: false,
            report_quiz_exhaustion: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing {
    pub categories: CategoryMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedQuestion {
    pub deleted: i64,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedQuestion {
    pub created: i64,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub total_questions: usize,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: String,
}

/// `question` is `None` only when exhaustion reporting is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: Option<QuestionView>,
}

/// Body of a quiz request: `{"quiz_category": {"id": 0}, "previous_questions": [1, 2]}`.
#[derive(Debug, Clone, Deserialize)]
struct QuizRequest {
    quiz_category: Option<QuizCategoryRef>,
    #[serde(default)]
    previous_questions: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Deserialize)]
struct QuizCategoryRef {
    #[serde(default, deserialize_with = "crate::models::lenient_i64")]
    id: Option<i64>,
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    random: Arc<dyn RandomIndex>,
    options: CatalogOptions,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>, options: CatalogOptions) -> Self {
        Self::with_random(store, Arc::new(ThreadRandom), options)
    }

    pub fn with_random(
        store: Arc<dyn CatalogStore>,
        random: Arc<dyn RandomIndex>,
        options: CatalogOptions,
    ) -> Self {
        Self {
            store,
            random,
            options,
        }
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// All categories as `{id: type}`. An empty catalog is `NotFound`.
    pub async fn list_categories(&self) -> Result<CategoryListing> {
        let categories = self
            .store
            .list_categories()
            .await
            .map_err(|e| not_found("list_categories", e))?;

        if categories.is_empty() {
            return Err(Error::NotFound("no categories".to_string()));
        }

        Ok(CategoryListing {
            categories: category_map(&categories),
        })
    }

    /// One page of all questions. An empty page is `NotFound`.
    pub async fn list_questions(&self, page: i64) -> Result<QuestionPage> {
        let categories = self
            .store
            .list_categories()
            .await
            .map_err(|e| not_found("list_questions", e))?;
        let questions = self
            .store
            .list_questions()
            .await
            .map_err(|e| not_found("list_questions", e))?;

        let window = self.page_of(page, &questions);
        if window.is_empty() {
            return Err(Error::NotFound(format!("page {page} has no questions")));
        }

        Ok(QuestionPage {
            questions: window,
            total_questions: questions.len(),
            total_categories: categories.len(),
            categories: category_map(&categories),
        })
    }

    /// Delete a question and return the requested page of what remains.
    ///
    /// A missing id is `Unprocessable`, same as a failed delete.
    pub async fn delete_question(&self, id: i64, page: i64) -> Result<DeletedQuestion> {
        let existing = self
            .store
            .get_question(id)
            .await
            .map_err(|e| unprocessable("delete_question", e))?;
        if existing.is_none() {
            return Err(Error::Unprocessable(format!("question {id} does not exist")));
        }

        self.store
            .delete_question(id)
            .await
            .map_err(|e| unprocessable("delete_question", e))?;

        let questions = self
            .store
            .list_questions()
            .await
            .map_err(|e| unprocessable("delete_question", e))?;

        tracing::info!(question_id = id, "Question deleted");

        Ok(DeletedQuestion {
            deleted: id,
            questions: self.page_of(page, &questions),
            total_questions: questions.len(),
        })
    }

    /// Create a question from a JSON body and return the requested page of all questions.
    pub async fn create_question(&self, body: &JsonValue, page: i64) -> Result<CreatedQuestion> {
        let fields: NewQuestion = match serde_json::from_value(body.clone()) {
            Ok(fields) => fields,
            Err(e) if self.options.validate_on_create => {
                return Err(Error::BadRequest(format!("invalid question: {e}")));
            }
            Err(e) => return Err(Error::Unprocessable(format!("invalid question: {e}"))),
        };

        if self.options.validate_on_create {
            fields
                .validate()
                .map_err(|e| Error::BadRequest(format!("invalid question: {e}")))?;
        }

        let created = self
            .store
            .insert_question(fields)
            .await
            .map_err(|e| unprocessable("create_question", e))?;

        let questions = self
            .store
            .list_questions()
            .await
            .map_err(|e| unprocessable("create_question", e))?;

        tracing::info!(question_id = created.id, "Question created");

        Ok(CreatedQuestion {
            created: created.id,
            questions: self.page_of(page, &questions),
            total_questions: questions.len(),
        })
    }

    /// Case-insensitive search over question text.
    ///
    /// No match is still a success with a zero total.
    pub async fn search_questions(&self, term: &str, page: i64) -> Result<SearchResults> {
        let questions = self
            .store
            .list_questions()
            .await
            .map_err(|e| not_found("search_questions", e))?;

        let matches: Vec<Question> = search(term, &questions).into_iter().cloned().collect();

        Ok(SearchResults {
            total_questions: matches.len(),
            questions: self.page_of(page, &matches),
        })
    }

    /// One page of the questions in a category, with the category's name.
    pub async fn questions_by_category(
        &self,
        category_id: i64,
        page: i64,
    ) -> Result<CategoryQuestions> {
        let category = self
            .store
            .get_category(category_id)
            .await
            .map_err(|e| not_found("questions_by_category", e))?
            .ok_or_else(|| Error::NotFound(format!("category {category_id} does not exist")))?;

        let questions = self
            .store
            .list_questions()
            .await
            .map_err(|e| not_found("questions_by_category", e))?;

        let in_category: Vec<Question> = filter_by_category(category_id, &questions)
            .into_iter()
            .cloned()
            .collect();

        Ok(CategoryQuestions {
            questions: self.page_of(page, &in_category),
            total_questions: in_category.len(),
            current_category: category.kind,
        })
    }

    /// Draw a random question the player has not seen yet.
    pub async fn next_quiz_question(&self, body: &JsonValue) -> Result<QuizQuestion> {
        let request: QuizRequest = serde_json::from_value(body.clone())
            .map_err(|e| Error::Unprocessable(format!("malformed quiz request: {e}")))?;

        let category_id = request
            .quiz_category
            .and_then(|c| c.id)
            .ok_or_else(|| Error::Unprocessable("quiz_category.id is required".to_string()))?;
        let category = QuizCategory::from_id(category_id, self.options.quiz_all_category_id);
        let excluded: HashSet<i64> = request
            .previous_questions
            .unwrap_or_default()
            .into_iter()
            .collect();

        let questions = self
            .store
            .list_questions()
            .await
            .map_err(|e| unprocessable("next_quiz_question", e))?;

        match next_question(category, &excluded, &questions, self.random.as_ref()) {
            QuizOutcome::Question(q) => Ok(QuizQuestion {
                question: Some(q.into()),
            }),
            QuizOutcome::Exhausted if self.options.report_quiz_exhaustion => {
                tracing::debug!(?category, "Quiz exhausted");
                Ok(QuizQuestion { question: None })
            }
            QuizOutcome::Exhausted => Err(Error::Unprocessable(format!(
                "no unseen questions left for {category:?}"
            ))),
        }
    }

    fn page_of(&self, page: i64, questions: &[Question]) -> Vec<QuestionView> {
        paginate(page, self.options.page_size, questions)
            .iter()
            .map(QuestionView::from)
            .collect()
    }
}

/// Extract the search term from a search body. A missing or null term searches everything.
pub fn search_term(body: &JsonValue) -> String {
    match body.get("search") {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn not_found(operation: &'static str, e: StoreError) -> Error {
    tracing::warn!(operation, error = %e, "Store failure reported as not found");
    Error::NotFound(e.to_string())
}

fn unprocessable(operation: &'static str, e: StoreError) -> Error {
    tracing::warn!(operation, error = %e, "Store failure reported as unprocessable");
    Error::Unprocessable(e.to_string())
}
