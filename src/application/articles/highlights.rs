use super::{ArticleService, DEFAULT_HIGHLIGHT_LIMIT, failure::report};
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleColumn, ArticleQuery},
};

fn top_published(column: ArticleColumn, limit: Option<u64>) -> ArticleQuery {
    ArticleQuery::new()
        .eq(ArticleColumn::Published, true)
        .order(column, false)
        .limit(limit.unwrap_or(DEFAULT_HIGHLIGHT_LIMIT))
}

impl ArticleService {
    /// Most viewed published articles.
    pub async fn popular_articles(&self, limit: Option<u64>) -> ApplicationResult<Vec<Article>> {
        self.store
            .select(&top_published(ArticleColumn::Views, limit))
            .await
            .map_err(|err| report("popular_articles", err))
    }

    /// Newest published articles.
    pub async fn recent_articles(&self, limit: Option<u64>) -> ApplicationResult<Vec<Article>> {
        self.store
            .select(&top_published(ArticleColumn::CreatedAt, limit))
            .await
            .map_err(|err| report("recent_articles", err))
    }
}
