#![allow(dead_code)]

use axum_test::TestServer;
use snaplink::application::services::ShortenPolicy;
use snaplink::domain::entities::{Link, NewLink};
use snaplink::domain::repositories::{InsertOutcome, LinkRepository};
use snaplink::infrastructure::persistence::MemoryLinkRepository;
use snaplink::routes::app_router;
use snaplink::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

pub const TEST_HOST: &str = "s.example.com";

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single connection keeps every query on the same `:memory:` database.
pub async fn sqlite_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

pub fn create_test_state(base_url: Option<&str>) -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(
        repo.clone(),
        ShortenPolicy::default(),
        base_url.map(str::to_string),
    );

    (state, repo)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

pub async fn create_test_link(repo: &dyn LinkRepository, code: &str, url: &str) -> Link {
    match repo.insert(NewLink::new(code, url)).await.unwrap() {
        InsertOutcome::Created(link) => link,
        InsertOutcome::CodeTaken => panic!("code {code} already taken"),
    }
}

/// Pulls the short URL out of the rendered home page.
pub fn extract_short_url(html: &str) -> String {
    let marker = "id=\"short-url\">";
    let start = html.find(marker).expect("short URL missing from page") + marker.len();
    let end = html[start..].find('<').unwrap() + start;
    html[start..end].to_string()
}
