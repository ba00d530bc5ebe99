use super::{ArticleService, failure::report};
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleColumn, ArticleQuery},
};

pub(super) fn search_query(term: &str) -> ArticleQuery {
    ArticleQuery::new()
        .ilike_any(&[ArticleColumn::Title, ArticleColumn::Excerpt], term)
        .eq(ArticleColumn::Published, true)
        .order(ArticleColumn::CreatedAt, false)
}

pub(super) fn tag_query(tag: &str) -> ArticleQuery {
    ArticleQuery::new()
        .contains(ArticleColumn::Tags, [tag])
        .eq(ArticleColumn::Published, true)
        .order(ArticleColumn::CreatedAt, false)
}

impl ArticleService {
    /// Published articles whose title or excerpt contains `term`, ignoring case.
    pub async fn search_articles(&self, term: &str) -> ApplicationResult<Vec<Article>> {
        self.store
            .select(&search_query(term))
            .await
            .map_err(|err| report("search_articles", err))
    }

    pub async fn articles_by_tag(&self, tag: &str) -> ApplicationResult<Vec<Article>> {
        self.store
            .select(&tag_query(tag))
            .await
            .map_err(|err| report("articles_by_tag", err))
    }
}
