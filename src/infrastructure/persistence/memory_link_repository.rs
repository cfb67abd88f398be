//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    links: Vec<Link>,
    by_code: HashMap<String, usize>,
    last_id: i64,
}

/// Link store kept in process memory.
///
/// Contents are lost on restart. The uniqueness check and the write happen
/// under a single lock, so concurrent inserts of the same code cannot both succeed.
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: Mutex<Inner>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("In-memory link store lock poisoned"))
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let inner = self.lock()?;
        Ok(inner.by_code.get(code).map(|&idx| inner.links[idx].clone()))
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.lock()?.by_code.contains_key(code))
    }

    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let mut inner = self.lock()?;

        if inner.by_code.contains_key(&new_link.code) {
            return Ok(InsertOutcome::CodeTaken);
        }

        inner.last_id += 1;
        let link = Link::new(
            inner.last_id,
            new_link.code,
            new_link.original_url,
            Utc::now(),
        );

        let idx = inner.links.len();
        inner.by_code.insert(link.code.clone(), idx);
        inner.links.push(link.clone());

        Ok(InsertOutcome::Created(link))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.lock()?.links.clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.lock()?.links.len() as i64)
    }
}
