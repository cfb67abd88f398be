//! Form submission handler for link shortening.

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::host_prefix::host_prefix_from_headers;
use crate::utils::url_validator::validate_url;
use crate::web::flash::Flash;
use crate::web::handlers::home::HomeTemplate;

/// Fields posted by the home page form.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub long_url: Option<String>,
}

/// Shortens the submitted URL and shows the result on the home page.
///
/// # Endpoint
///
/// `POST /shorten` (form field `long_url`)
///
/// # Responses
///
/// - **200**: home page with the short URL
/// - **303**: redirect to `/` with a flash message when the URL is empty or invalid
/// - **400**: no `BASE_URL` configured and the `Host` header is unusable
/// - **500**: storage failure or no free code found
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ShortenForm>,
) -> Result<Response, AppError> {
    let raw_url = form.long_url.unwrap_or_default();

    // Invalid input gets the flash even when the prefix could not be resolved.
    if validate_url(&raw_url).is_err() {
        return Ok(invalid_url_redirect());
    }

    let host_prefix = match &state.base_url {
        Some(base_url) => base_url.clone(),
        None => host_prefix_from_headers(&headers)?,
    };

    match state.shorten_service.shorten(&raw_url, &host_prefix).await {
        Ok(shortened) => Ok(HomeTemplate {
            short_url: Some(shortened.short_url),
            flash: None,
        }
        .into_response()),
        Err(err) if err.is_invalid_url() => Ok(invalid_url_redirect()),
        Err(err) => Err(err),
    }
}

fn invalid_url_redirect() -> Response {
    (
        AppendHeaders([(SET_COOKIE, Flash::InvalidUrl.set_cookie())]),
        Redirect::to("/"),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ShortenPolicy;
    use crate::infrastructure::persistence::MemoryLinkRepository;
    use axum::http::{StatusCode, header::LOCATION};
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(
            Arc::new(MemoryLinkRepository::new()),
            ShortenPolicy::default(),
            None,
        )
    }

    fn form(long_url: &str) -> Form<ShortenForm> {
        Form(ShortenForm {
            long_url: Some(long_url.to_string()),
        })
    }

    #[tokio::test]
    async fn test_invalid_url_without_host_still_flashes() {
        let response = shorten_handler(State(state()), HeaderMap::new(), form("not-a-url"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/");
        assert!(
            response.headers()[SET_COOKIE]
                .to_str()
                .unwrap()
                .starts_with("flash=invalid_url")
        );
    }

    #[tokio::test]
    async fn test_valid_url_without_host_is_bad_request() {
        let state = state();
        let listing = state.listing_service.clone();

        let err = shorten_handler(State(state), HeaderMap::new(), form("https://example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { code: "missing_host", .. }));
        assert_eq!(listing.count().await.unwrap(), 0);
    }
}
