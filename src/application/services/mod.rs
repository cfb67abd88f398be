//! Business logic services for the application layer.

pub mod listing_service;
pub mod redirect_service;
pub mod shorten_service;

pub use listing_service::ListingService;
pub use redirect_service::RedirectService;
pub use shorten_service::{ShortenPolicy, ShortenService, ShortenedLink};
