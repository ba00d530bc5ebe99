use super::{ArticleService, DEFAULT_PAGE_SIZE, failure::report};
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleColumn, ArticleQuery},
};

/// Listing options. A `limit` or `offset` of zero counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArticlesQuery {
    pub published: Option<bool>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub order_by: Option<ArticleColumn>,
}

impl ListArticlesQuery {
    pub fn published() -> Self {
        Self {
            published: Some(true),
            ..Self::default()
        }
    }

    pub(super) fn to_store_query(&self) -> ArticleQuery {
        let mut query = ArticleQuery::new();

        if let Some(published) = self.published {
            query = query.eq(ArticleColumn::Published, published);
        }

        query = query.order(self.order_by.unwrap_or(ArticleColumn::CreatedAt), false);

        let limit = self.limit.filter(|limit| *limit > 0);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        if let Some(offset) = self.offset.filter(|offset| *offset > 0) {
            let page = limit.unwrap_or(DEFAULT_PAGE_SIZE);
            query = query.range(offset, offset.saturating_add(page - 1));
        }

        query
    }
}

impl ArticleService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<Article>> {
        self.store
            .select(&query.to_store_query())
            .await
            .map_err(|err| report("list_articles", err))
    }
}
