// tests/support/mocks.rs
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use folio_core::domain::article::{
    Article, ArticleChanges, ArticleId, ArticleQuery, ArticleStore, NewArticle,
};
use folio_core::domain::errors::{DomainError, DomainResult, StoreError};

/// Store whose every call fails with the same store error.
#[derive(Default)]
pub struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> DomainResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Store(
            StoreError::new("connection refused").with_code("08006"),
        ))
    }
}

#[async_trait]
impl ArticleStore for FailingStore {
    async fn select(&self, _query: &ArticleQuery) -> DomainResult<Vec<Article>> {
        self.fail()
    }

    async fn select_single(&self, _query: &ArticleQuery) -> DomainResult<Article> {
        self.fail()
    }

    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        self.fail()
    }

    async fn update(&self, _id: ArticleId, _changes: ArticleChanges) -> DomainResult<Article> {
        self.fail()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        self.fail()
    }

    async fn increment_views(&self, _id: ArticleId) -> DomainResult<()> {
        self.fail()
    }
}
