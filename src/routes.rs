//! Top-level router configuration combining web pages and redirects.
//!
//! # Route Structure
//!
//! - `GET  /`          - Home page with the shortening form
//! - `POST /shorten`   - Form submission
//! - `GET  /history`   - All shortened links
//! - `GET  /health`    - Link store health check
//! - `/static/*`       - Static assets
//! - `GET  /{code}`    - Short link redirect
//!
//! Fixed routes take priority over `/{code}`; generated codes never collide with
//! them (see [`crate::utils::code_generator::is_reserved_code`]).

use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps the router so that `/history/` and `/history` are the same route.
pub fn with_trailing_slash_normalization(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
