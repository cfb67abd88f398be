//! # snaplink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Link`] entity and the link store contract
//! - **Application Layer** ([`application`]) - Shortening, redirection and listing services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory link stores
//! - **API Layer** ([`api`]) - Redirect and health handlers, request tracing
//! - **Web Layer** ([`web`]) - HTML pages and flash messages
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://data.sqlite"   # Optional, this is the default
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ListingService, RedirectService, ShortenPolicy, ShortenService, ShortenedLink,
    };
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::{InsertOutcome, LinkRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryLinkRepository, SqliteLinkRepository};
    pub use crate::state::AppState;
}
