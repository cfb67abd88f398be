//! Shortening history page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the history page.
///
/// Renders `templates/history.html` with every stored link in store order.
#[derive(Template, WebTemplate)]
#[template(path = "history.html")]
pub struct HistoryTemplate {
    pub links: Vec<Link>,
}

/// Renders the list of all shortened links.
///
/// # Endpoint
///
/// `GET /history`
pub async fn history_handler(State(state): State<AppState>) -> Result<HistoryTemplate, AppError> {
    let links = state.listing_service.list_all().await?;
    Ok(HistoryTemplate { links })
}
