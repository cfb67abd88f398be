mod common;

use async_trait::async_trait;
use snaplink::application::services::ShortenPolicy;
use snaplink::domain::entities::{Link, NewLink};
use snaplink::domain::repositories::{InsertOutcome, LinkRepository};
use snaplink::error::AppError;
use snaplink::state::AppState;
use std::sync::Arc;

/// Store whose every call fails, to exercise degraded paths.
struct BrokenRepository;

#[async_trait]
impl LinkRepository for BrokenRepository {
    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::internal("Database error: unable to open database file"))
    }

    async fn exists_by_code(&self, _code: &str) -> Result<bool, AppError> {
        Err(AppError::internal("Database error: unable to open database file"))
    }

    async fn insert(&self, _new_link: NewLink) -> Result<InsertOutcome, AppError> {
        Err(AppError::internal("Database error: unable to open database file"))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        Err(AppError::internal("Database error: unable to open database file"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Database error: unable to open database file"))
    }
}

fn broken_state() -> AppState {
    AppState::new(Arc::new(BrokenRepository), ShortenPolicy::default(), None)
}

#[tokio::test]
async fn test_health_ok() {
    let (state, repo) = common::create_test_state(None);
    let server = common::create_test_server(state);

    common::create_test_link(repo.as_ref(), "abc123", "https://example.com").await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "1 links stored");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_store_fails() {
    let server = common::create_test_server(broken_state());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_store_failure_is_generic_server_error() {
    let server = common::create_test_server(broken_state());

    let response = server
        .post("/shorten")
        .add_header("Host", common::TEST_HOST)
        .form(&[("long_url", "https://example.com")])
        .await;

    assert_eq!(response.status_code(), 500);
    let body = response.text();
    assert!(!body.contains("unable to open"));
    assert!(body.contains("internal_error"));

    assert_eq!(server.get("/abc123").await.status_code(), 500);
    assert_eq!(server.get("/history").await.status_code(), 500);
}

#[tokio::test]
async fn test_invalid_url_rejected_before_store() {
    let server = common::create_test_server(broken_state());

    let response = server
        .post("/shorten")
        .add_header("Host", common::TEST_HOST)
        .form(&[("long_url", "not-a-url")])
        .await;

    assert_eq!(response.status_code(), 303);
}
