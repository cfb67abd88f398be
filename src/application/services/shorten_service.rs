//! Link creation service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, is_reserved_code};
use crate::utils::url_validator::validate_url;

/// Default number of candidate codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// User-facing message for rejected URLs.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (with http:// or https://)";

/// Code generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortenPolicy {
    /// Characters per generated code.
    pub code_length: usize,
    /// Candidate codes tried per request, shared between probe collisions
    /// and insert-time collisions.
    pub max_attempts: usize,
}

impl Default for ShortenPolicy {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A freshly created link together with its public short URL.
#[derive(Debug, Clone)]
pub struct ShortenedLink {
    pub link: Link,
    pub short_url: String,
}

/// Service for creating shortened links.
///
/// Validates the submitted URL, finds a free code and stores the mapping.
/// The `exists_by_code` probe only saves a round trip on collisions; the store
/// decides uniqueness at insert time, and a lost race is retried with a new code.
pub struct ShortenService<L: LinkRepository + ?Sized = dyn LinkRepository> {
    repository: Arc<L>,
    policy: ShortenPolicy,
}

impl<L: LinkRepository + ?Sized> ShortenService<L> {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<L>, policy: ShortenPolicy) -> Self {
        Self { repository, policy }
    }

    /// Shortens `raw_url` and returns the link with `host_prefix + code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with code `invalid_url` if the URL is empty
    /// or not an absolute http/https URL. The store is not touched in that case.
    ///
    /// Returns [`AppError::CodeGenerationExhausted`] if every candidate within
    /// [`ShortenPolicy::max_attempts`] collided.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten(&self, raw_url: &str, host_prefix: &str) -> Result<ShortenedLink, AppError> {
        let original_url = validate_url(raw_url).map_err(|e| {
            tracing::debug!(reason = %e, "rejected URL");
            AppError::bad_request("invalid_url", INVALID_URL_MESSAGE)
        })?;

        let link = self.create_with_unique_code(original_url).await?;
        let short_url = short_url(host_prefix, &link.code);

        tracing::info!(code = %link.code, id = link.id, "link created");

        Ok(ShortenedLink { link, short_url })
    }

    async fn create_with_unique_code(&self, original_url: &str) -> Result<Link, AppError> {
        for attempt in 1..=self.policy.max_attempts {
            let code = generate_code(self.policy.code_length);

            if is_reserved_code(&code) || self.repository.exists_by_code(&code).await? {
                tracing::debug!(%code, attempt, "short code collision");
                continue;
            }

            match self
                .repository
                .insert(NewLink::new(code.as_str(), original_url))
                .await?
            {
                InsertOutcome::Created(link) => return Ok(link),
                InsertOutcome::CodeTaken => {
                    tracing::warn!(%code, attempt, "short code claimed by a concurrent writer");
                }
            }
        }

        Err(AppError::CodeGenerationExhausted {
            attempts: self.policy.max_attempts,
        })
    }
}

/// Joins a host prefix and a code with exactly one `/`.
pub fn short_url(host_prefix: &str, code: &str) -> String {
    format!("{}/{}", host_prefix.trim_end_matches('/'), code)
}
