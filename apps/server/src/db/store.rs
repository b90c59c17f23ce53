//! PostgreSQL implementation of the catalog store

use crate::config::DatabaseConfig;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, postgres::PgRow, PgPool, Row};
use std::time::Duration;
use trivia_core::{
    error::{StoreError, StoreResult},
    CatalogStore, Category, NewQuestion, Question,
};

/// Open a connection pool sized per `config`.
pub async fn connect(config: &DatabaseConfig) -> crate::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .min_connections(config.pool_min_size)
        .max_connections(config.pool_max_size)
        .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
        .connect(&config.url)
        .await?;
    Ok(pool)
}

/// Apply the embedded schema migrations (tables and seeded categories).
pub async fn run_migrations(pool: &PgPool) -> crate::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PostgresCatalogStore {
    pool: PgPool,
}

impl PostgresCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn question_from_row(row: &PgRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}

fn category_from_row(row: &PgRow) -> Category {
    Category {
        id: row.get("id"),
        kind: row.get("type"),
    }
}

/// Constraint violations (SQLSTATE class 23) mean the record itself was refused.
fn store_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().is_some_and(|code| code.starts_with("23")) {
            return StoreError::Rejected(db.message().to_string());
        }
    }
    StoreError::Database(e.to_string())
}

#[async_trait]
impl CatalogStore for PostgresCatalogStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(rows.iter().map(category_from_row).collect())
    }

    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        let row = sqlx::query("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(row.as_ref().map(category_from_row))
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        let query = r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(rows.iter().map(question_from_row).collect())
    }

    async fn get_question(&self, id: i64) -> StoreResult<Option<Question>> {
        let row = sqlx::query(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.as_ref().map(question_from_row))
    }

    async fn insert_question(&self, fields: NewQuestion) -> StoreResult<Question> {
        // Missing fields bind as NULL and are refused by the NOT NULL constraints.
        let query = r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
        "#;

        let row = sqlx::query(query)
            .bind(fields.question)
            .bind(fields.answer)
            .bind(fields.category)
            .bind(fields.difficulty)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(question_from_row(&row))
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::MissingRecord {
                entity: "question",
                id,
            });
        }
        Ok(())
    }
}
