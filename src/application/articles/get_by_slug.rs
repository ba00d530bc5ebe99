use super::{ArticleService, failure::report};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{Article, ArticleColumn, ArticleQuery},
};

pub(super) fn slug_query(slug: &str) -> ArticleQuery {
    ArticleQuery::new().eq(ArticleColumn::Slug, slug)
}

impl ArticleService {
    /// Public single-article read. Every fetched row has one view increment
    /// requested for it, drafts included; drafts are then reported as absent.
    pub async fn get_article_by_slug(&self, slug: &str) -> ApplicationResult<Article> {
        let article = self
            .store
            .select_single(&slug_query(slug))
            .await
            .map_err(|err| report("get_article_by_slug", err))?;

        self.increment_views(article.id).await;

        if !article.published {
            tracing::warn!(slug, id = %article.id, "article is not published");
            return Err(ApplicationError::not_found("article not found"));
        }

        Ok(article)
    }
}
