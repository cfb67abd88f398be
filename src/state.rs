//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    ListingService, RedirectService, ShortenPolicy, ShortenService,
};
use crate::domain::repositories::LinkRepository;

/// Services and settings built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_service: Arc<RedirectService>,
    pub listing_service: Arc<ListingService>,
    /// Fixed prefix for short URLs. When `None`, the prefix is derived from the
    /// request's `Host` header.
    pub base_url: Option<String>,
}

impl AppState {
    /// Wires all services to a single link store.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        policy: ShortenPolicy,
        base_url: Option<String>,
    ) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(repository.clone(), policy)),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            listing_service: Arc::new(ListingService::new(repository)),
            base_url,
        }
    }
}
