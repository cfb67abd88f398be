//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Body returned for unknown codes.
pub const NOT_FOUND_BODY: &str = "URL not found";

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **307 Temporary Redirect** to the stored URL
/// - **404 Not Found** with plain text `URL not found` for unknown codes
/// - **500** on storage failure
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.redirect_service.resolve(&code).await? {
        Some(original_url) => Ok(Redirect::temporary(&original_url).into_response()),
        None => {
            debug!(%code, "unknown short code");
            Ok((StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response())
        }
    }
}
