use super::{ArticleService, failure::report};
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleChanges, ArticleId, ArticleSlug, ArticleTitle},
};

/// Partial update; `None` leaves a field untouched. View counts cannot be
/// set here, see [`ArticleService::increment_views`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateArticleCommand {
    pub id: ArticleId,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body_html: Option<String>,
    pub url: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl UpdateArticleCommand {
    pub const fn new(id: ArticleId) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body_html: None,
            url: None,
            excerpt: None,
            cover_image: None,
            published: None,
            tags: None,
        }
    }

    fn into_changes(self) -> ApplicationResult<(ArticleId, ArticleChanges)> {
        let changes = ArticleChanges {
            title: self.title.map(ArticleTitle::new).transpose()?,
            slug: self.slug.map(ArticleSlug::new).transpose()?,
            body_html: self.body_html,
            url: self.url,
            excerpt: self.excerpt,
            cover_image: self.cover_image,
            published: self.published,
            tags: self.tags,
        };
        Ok((self.id, changes))
    }
}

impl ArticleService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<Article> {
        let (id, changes) = command.into_changes().inspect_err(|err| {
            tracing::error!(operation = "update_article", error = %err, "invalid article update");
        })?;

        if changes.is_empty() {
            return self.get_article_by_id(id).await;
        }

        self.store
            .update(id, changes)
            .await
            .map_err(|err| report("update_article", err))
    }
}
