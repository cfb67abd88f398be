//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{HeaderMap, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse, Response},
};

use crate::web::flash;

/// Template for the home page.
///
/// Renders `templates/home.html` with:
/// - URL submission form
/// - The short URL just created, if any
/// - A pending flash message, if any
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub short_url: Option<String>,
    pub flash: Option<&'static str>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// A flash cookie is consumed: its message is shown once and the cookie cleared.
pub async fn home_handler(headers: HeaderMap) -> Response {
    let page = HomeTemplate {
        short_url: None,
        flash: flash::read(&headers).map(|f| f.message()),
    };

    if flash::is_present(&headers) {
        (AppendHeaders([(SET_COOKIE, flash::clear_cookie())]), page).into_response()
    } else {
        page.into_response()
    }
}
