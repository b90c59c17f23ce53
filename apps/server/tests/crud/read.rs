//! GET /categories and GET /questions

use crate::support::*;
use axum::http::{Method, StatusCode};
use serde_json::json;
use std::sync::Arc;
use trivia_core::{InMemoryStore, ThreadRandom};

#[tokio::test]
async fn list_categories_keyed_by_id() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, body) = app.json(Method::GET, "/categories", None).await?;
    assert_status(status, StatusCode::OK, "list categories");
    assert_success(&body);
    assert_eq!(
        body["categories"],
        json!({
            "1": "Science",
            "2": "Art",
            "3": "Geography",
            "4": "History",
            "5": "Entertainment",
            "6": "Sports"
        })
    );
    Ok(())
}

#[tokio::test]
async fn empty_category_catalog_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::build(InMemoryStore::new(), |_| {}, Arc::new(ThreadRandom))?;

    let (status, body) = app.json(Method::GET, "/categories", None).await?;
    assert_status(status, StatusCode::NOT_FOUND, "empty catalog");
    assert_failure(&body, StatusCode::NOT_FOUND, "resource not found");
    Ok(())
}

#[tokio::test]
async fn second_page_of_nineteen_questions() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(19).await?;

    let (status, body) = app.json(Method::GET, "/questions?page=2", None).await?;
    assert_status(status, StatusCode::OK, "page 2");
    assert_success(&body);
    assert_eq!(question_ids(&body)?, (11..=19).collect::<Vec<_>>());
    assert_eq!(total_questions(&body)?, 19);
    assert_eq!(body["total_categories"], 6);
    assert_eq!(body["categories"]["1"], "Science");
    Ok(())
}

#[tokio::test]
async fn missing_or_non_numeric_page_means_first_page() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(15).await?;

    for path in ["/questions", "/questions?page=abc", "/questions?page="] {
        let (status, body) = app.json(Method::GET, path, None).await?;
        assert_status(status, StatusCode::OK, path);
        assert_eq!(question_ids(&body)?, (1..=10).collect::<Vec<_>>(), "{path}");
    }
    Ok(())
}

#[tokio::test]
async fn listing_is_idempotent() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(12).await?;

    let (_, first) = app.json(Method::GET, "/questions?page=1", None).await?;
    let (_, second) = app.json(Method::GET, "/questions?page=1", None).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn empty_store_and_out_of_range_pages_are_not_found() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, body) = app.json(Method::GET, "/questions", None).await?;
    assert_status(status, StatusCode::NOT_FOUND, "no questions");
    assert_failure(&body, StatusCode::NOT_FOUND, "resource not found");

    app.seed_questions(5).await?;
    for path in ["/questions?page=2", "/questions?page=1000", "/questions?page=0", "/questions?page=-1"] {
        let (status, body) = app.json(Method::GET, path, None).await?;
        assert_status(status, StatusCode::NOT_FOUND, path);
        assert_failure(&body, StatusCode::NOT_FOUND, "resource not found");
    }
    Ok(())
}

#[tokio::test]
async fn question_representation_has_exactly_public_fields() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(1).await?;

    let (_, body) = app.json(Method::GET, "/questions", None).await?;
    let question = &body["questions"][0];
    let mut keys: Vec<&str> = question
        .as_object()
        .map(|o| o.keys().map(String::as_str).collect())
        .unwrap_or_default();
    keys.sort_unstable();
    assert_eq!(keys, vec!["answer", "category", "difficulty", "id", "question"]);
    assert_eq!(question["category"], 1, "category stays the raw id");
    Ok(())
}

#[tokio::test]
async fn page_size_is_configurable() -> anyhow::Result<()> {
    let app = TestApp::new_with_config(|config| config.catalog.page_size = 4).await?;
    app.seed_questions(10).await?;

    let (status, body) = app.json(Method::GET, "/questions?page=3", None).await?;
    assert_status(status, StatusCode::OK, "page 3 of 4-sized pages");
    assert_eq!(question_ids(&body)?, vec![9, 10]);
    Ok(())
}

#[tokio::test]
async fn repeated_page_parameter_uses_first_value() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(19).await?;

    let (status, body) = app.json(Method::GET, "/questions?page=2&page=1", None).await?;
    assert_status(status, StatusCode::OK, "repeated page");
    assert_eq!(question_ids(&body)?, (11..=19).collect::<Vec<_>>());
    assert_eq!(total_questions(&body)?, 19);

    for path in ["/questions?page=&page=2", "/questions?page=x&page=2"] {
        let (status, body) = app.json(Method::GET, path, None).await?;
        assert_status(status, StatusCode::OK, path);
        assert_eq!(question_ids(&body)?, (1..=10).collect::<Vec<_>>(), "{path}");
    }
    Ok(())
}
