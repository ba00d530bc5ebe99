use crate::domain::article::entity::{Article, ArticleChanges, NewArticle};
use crate::domain::article::query::ArticleQuery;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Port to the remote article table.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn select(&self, query: &ArticleQuery) -> DomainResult<Vec<Article>>;

    /// Single-row contract: zero rows is `NotFound`, more than one is a store error.
    async fn select_single(&self, query: &ArticleQuery) -> DomainResult<Article>;

    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    async fn update(&self, id: ArticleId, changes: ArticleChanges) -> DomainResult<Article>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;

    /// Server-side `increment_views(article_id)` procedure.
    async fn increment_views(&self, id: ArticleId) -> DomainResult<()>;
}
