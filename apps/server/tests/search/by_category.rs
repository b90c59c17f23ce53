//! GET /categories/{id}/questions

use crate::support::*;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn questions_of_a_category_carry_its_name() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(10).await?;

    let (status, body) = app.json(Method::GET, "/categories/2/questions", None).await?;
    assert_status(status, StatusCode::OK, "category 2");
    assert_success(&body);
    assert_eq!(question_ids(&body)?, vec![2, 7]);
    assert_eq!(total_questions(&body)?, 2);
    assert_eq!(body["current_category"], "Art");
    Ok(())
}

#[tokio::test]
async fn category_without_questions_is_empty_success() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(10).await?;

    // No sample question is filed under Entertainment.
    let (status, body) = app.json(Method::GET, "/categories/5/questions", None).await?;
    assert_status(status, StatusCode::OK, "empty category");
    assert_eq!(body["questions"], json!([]));
    assert_eq!(total_questions(&body)?, 0);
    assert_eq!(body["current_category"], "Entertainment");
    Ok(())
}

#[tokio::test]
async fn unknown_category_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(3).await?;

    for path in ["/categories/1000/questions", "/categories/abc/questions"] {
        let (status, body) = app.json(Method::GET, path, None).await?;
        assert_status(status, StatusCode::NOT_FOUND, path);
        assert_failure(&body, StatusCode::NOT_FOUND, "resource not found");
    }
    Ok(())
}

#[tokio::test]
async fn category_listing_is_paged() -> anyhow::Result<()> {
    let app = TestApp::new_with_config(|config| config.catalog.page_size = 3).await?;
    app.seed_questions(25).await?;

    // Science questions sit at ids 1, 6, 11, 16, 21.
    let (status, body) = app
        .json(Method::GET, "/categories/1/questions?page=2", None)
        .await?;
    assert_status(status, StatusCode::OK, "page 2 of Science");
    assert_eq!(question_ids(&body)?, vec![16, 21]);
    assert_eq!(total_questions(&body)?, 5);
    Ok(())
}
