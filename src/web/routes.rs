//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{history_handler, home_handler, shorten_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET  /`        - Home page with the shortening form
/// - `POST /shorten` - Form submission
/// - `GET  /history` - All shortened links
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_handler))
        .route("/history", get(history_handler))
}
