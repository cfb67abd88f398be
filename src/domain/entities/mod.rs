//! Core domain entities.
//!
//! - [`Link`] - A persisted short code to URL mapping
//! - [`NewLink`] - Input for creating a link; the store assigns `id` and `created_at`

pub mod link;

pub use link::{Link, NewLink};
