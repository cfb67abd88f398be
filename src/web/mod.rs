//! Browser-facing HTML layer.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`flash`] - Cookie-carried one-shot messages
//! - [`routes`] - Page route configuration

pub mod flash;
pub mod handlers;
pub mod routes;
