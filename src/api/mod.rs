//! Redirect and health endpoints plus shared HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - JSON response shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
