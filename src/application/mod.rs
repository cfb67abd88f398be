//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkRepository`] trait and
//! return plain data; rendering happens in the web layer.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - URL validation and collision-free code allocation
//! - [`services::redirect_service::RedirectService`] - Short code lookup
//! - [`services::listing_service::ListingService`] - Shortening history

pub mod services;
