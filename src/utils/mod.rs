//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short code generation and shape checks
//! - [`url_validator`] - Target URL validation
//! - [`host_prefix`] - Short URL prefix from HTTP headers

pub mod code_generator;
pub mod host_prefix;
pub mod url_validator;
