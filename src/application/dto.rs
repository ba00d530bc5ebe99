use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub slug: String,
    pub body_html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub published: bool,
    pub views: u64,
    pub tags: Vec<String>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            created_at: article.created_at,
            title: article.title.into(),
            slug: article.slug.into(),
            body_html: article.body_html,
            url: article.url,
            excerpt: article.excerpt,
            cover_image: article.cover_image,
            published: article.published,
            views: article.views,
            tags: article.tags,
        }
    }
}
