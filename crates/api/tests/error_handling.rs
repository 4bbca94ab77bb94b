//! Error-path integration tests: validation failures and foreign-key
//! violations surface as structured JSON errors with the right status.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_raw};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_required_field_returns_422(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    // `title` is required by the creation shape.
    let response = post_json(
        app,
        "/milestones/",
        serde_json::json!({
            "image": "img.jpg",
            "text": "no title"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    // The error message names the offending field.
    assert!(json["error"].as_str().unwrap().contains("title"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_mistyped_field_returns_422(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/milestones/",
        serde_json::json!({
            "title": "Bad priority",
            "image": "img.jpg",
            "text": "text",
            "priority": "high"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_json_returns_422(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/milestones/", "{not json").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_group_id_returns_409(pool: SqlitePool) {
    milestones_db::seed(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/milestones/",
        serde_json::json!({
            "group_id": 999,
            "title": "Orphan",
            "image": "img.jpg",
            "text": "dangling reference"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONSTRAINT_VIOLATION");
}
