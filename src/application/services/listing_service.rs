//! Shortening history service.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Read-only access to every stored link.
pub struct ListingService<L: LinkRepository + ?Sized = dyn LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> ListingService<L> {
    /// Creates a new listing service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Returns all links in store order (oldest first).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_all().await
    }

    /// Returns the number of stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewLink;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::persistence::MemoryLinkRepository;

    #[tokio::test]
    async fn test_list_all_empty() {
        let service = ListingService::new(Arc::new(MemoryLinkRepository::new()));

        assert!(service.list_all().await.unwrap().is_empty());
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_all_returns_store_order() {
        let repo = Arc::new(MemoryLinkRepository::new());
        repo.insert(NewLink::new("first1", "https://one.com"))
            .await
            .unwrap();
        repo.insert(NewLink::new("second", "https://two.com"))
            .await
            .unwrap();

        let service = ListingService::new(repo);
        let links = service.list_all().await.unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].code, "first1");
        assert_eq!(links[0].original_url, "https://one.com");
        assert_eq!(links[1].code, "second");
        assert_eq!(service.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_all_propagates_store_failure() {
        let mut mock = MockLinkRepository::new();
        mock.expect_list_all()
            .times(1)
            .returning(|| Err(AppError::internal("Database error: closed")));

        let service = ListingService::new(Arc::new(mock));

        assert!(service.list_all().await.is_err());
    }
}
