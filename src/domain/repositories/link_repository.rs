//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an insert attempt.
///
/// A short code collision is a normal outcome, not an error: the caller decides
/// whether to retry with a fresh code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The link was stored and assigned an id.
    Created(Link),
    /// Another link already owns the requested code. Nothing was written.
    CodeTaken,
}

/// Persistent mapping from short code to original URL.
///
/// The store is the final arbiter of code uniqueness: `insert` must detect a
/// duplicate code atomically, even when a concurrent writer passed the same
/// `exists_by_code` probe.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns true if a link with this code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn exists_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Stores a new link.
    ///
    /// Returns [`InsertOutcome::CodeTaken`] if the code already exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Returns every link in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
