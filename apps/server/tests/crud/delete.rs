//! DELETE /questions/{id}

use crate::support::*;
use axum::http::{Method, StatusCode};
use trivia_core::CatalogStore;

#[tokio::test]
async fn delete_existing_question() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(12).await?;

    let (status, body) = app.json(Method::DELETE, "/questions/5", None).await?;
    assert_status(status, StatusCode::OK, "delete");
    assert_success(&body);
    assert_eq!(body["deleted"], 5);
    assert_eq!(total_questions(&body)?, 11);
    assert_eq!(
        question_ids(&body)?,
        vec![1, 2, 3, 4, 6, 7, 8, 9, 10, 11]
    );

    assert!(app.store.get_question(5).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_missing_question_is_unprocessable() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(3).await?;

    let (status, body) = app.json(Method::DELETE, "/questions/1000", None).await?;
    assert_status(status, StatusCode::UNPROCESSABLE_ENTITY, "delete missing");
    assert_failure(&body, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
    Ok(())
}

#[tokio::test]
async fn second_delete_of_same_id_is_unprocessable() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(2).await?;

    let (status, _) = app.json(Method::DELETE, "/questions/2", None).await?;
    assert_status(status, StatusCode::OK, "first delete");

    let (status, body) = app.json(Method::DELETE, "/questions/2", None).await?;
    assert_status(status, StatusCode::UNPROCESSABLE_ENTITY, "second delete");
    assert_failure(&body, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
    Ok(())
}

#[tokio::test]
async fn deleted_ids_are_not_reused() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(3).await?;

    let (status, _) = app.json(Method::DELETE, "/questions/3", None).await?;
    assert_status(status, StatusCode::OK, "delete last");

    let (status, body) = app
        .json(Method::POST, "/questions", Some(&kenya_question()))
        .await?;
    assert_status(status, StatusCode::OK, "create");
    assert_eq!(body["created"], 4);
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_matches_nothing() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    app.seed_questions(1).await?;

    let (status, body) = app.json(Method::DELETE, "/questions/abc", None).await?;
    assert_status(status, StatusCode::NOT_FOUND, "non-numeric id");
    assert_failure(&body, StatusCode::NOT_FOUND, "resource not found");
    Ok(())
}
