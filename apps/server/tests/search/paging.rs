//! Pagination of search results

use crate::support::*;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn search_results_are_paged_but_total_counts_all_matches() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    // Every fifth sample asks about the heaviest organ.
    app.seed_questions(60).await?;

    let term = json!({ "search": "heaviest" });
    let (status, first) = app.json(Method::POST, "/search", Some(&term)).await?;
    assert_status(status, StatusCode::OK, "page 1");
    assert_eq!(question_ids(&first)?.len(), 10);
    assert_eq!(total_questions(&first)?, 12);

    let (status, second) = app
        .json(Method::POST, "/search?page=2", Some(&term))
        .await?;
    assert_status(status, StatusCode::OK, "page 2");
    assert_eq!(question_ids(&second)?, vec![51, 56]);
    assert_eq!(total_questions(&second)?, 12);
    Ok(())
}

#[tokio::test]
async fn search_page_past_the_end_is_empty_success() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(5).await?;

    let (status, body) = app
        .json(Method::POST, "/search?page=9", Some(&json!({ "search": "the" })))
        .await?;
    assert_status(status, StatusCode::OK, "page past the end");
    assert_eq!(body["questions"], json!([]));
    assert!(total_questions(&body)? > 0);
    Ok(())
}

#[tokio::test]
async fn repeated_page_parameter_never_rejects_search() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(60).await?;

    let term = json!({ "search": "heaviest" });
    let (status, body) = app
        .json(Method::POST, "/search?page=2&page=1", Some(&term))
        .await?;
    assert_status(status, StatusCode::OK, "repeated page");
    assert_eq!(question_ids(&body)?, vec![51, 56]);

    let (status, body) = app
        .json(Method::GET, "/categories/1/questions?page=1&page=9", None)
        .await?;
    assert_status(status, StatusCode::OK, "repeated page by category");
    assert_eq!(total_questions(&body)?, 12);
    Ok(())
}
