//! In-memory implementation of [`CatalogStore`]

use crate::{
    error::{StoreError, StoreResult},
    models::{Category, NewQuestion, Question},
    store::CatalogStore,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Categories every fresh catalog starts with.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    /// Last id handed out. Never decreases, so deleted ids are not reused.
    last_id: i64,
}

/// Store backed by ordered maps behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let store = Self::new();
        if let Ok(mut tables) = store.tables.write() {
            for category in categories {
                tables.categories.insert(category.id, category);
            }
        }
        store
    }

    pub fn with_default_categories() -> Self {
        Self::with_categories(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(id, kind)| Category::new(*id, *kind)),
        )
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Database("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Database("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions.values().cloned().collect())
    }

    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn insert_question(&self, fields: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.write()?;
        let id = tables.last_id + 1;
        let question = fields.into_question(id).ok_or_else(|| {
            StoreError::Rejected("question, answer, category and difficulty are required".into())
        })?;
        tables.last_id = id;
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        match self.write()?.questions.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::MissingRecord {
                entity: "question",
                id,
            }),
        }
    }
}
