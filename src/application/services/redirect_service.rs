//! Short code resolution service.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed_code;

/// Service for resolving short codes to their original URLs.
pub struct RedirectService<L: LinkRepository + ?Sized = dyn LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> RedirectService<L> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Returns the original URL for `code`, or `None` if no link uses it.
    ///
    /// Codes that could never have been generated are answered without a store lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        if !is_well_formed_code(code) {
            return Ok(None);
        }

        let link = self.repository.find_by_code(code).await?;
        Ok(link.map(|l| l.original_url))
    }
}
