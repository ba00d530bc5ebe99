// src/infrastructure/repositories/row.rs
//! Wire/row shapes shared by the Postgres and PostgREST adapters.

use crate::domain::article::{
    Article, ArticleChanges, ArticleColumn, ArticleId, ArticleSlug, ArticleTitle, NewArticle,
};
use crate::domain::errors::{DomainError, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub(super) fn select_columns() -> String {
    ArticleColumn::ALL
        .iter()
        .map(|column| column.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Deserialize, FromRow)]
pub(super) struct ArticleRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    title: String,
    slug: String,
    body_html: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    cover_image: Option<String>,
    #[serde(default)]
    published: bool,
    #[serde(default)]
    views: Option<i64>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let malformed = |err: DomainError| {
            DomainError::Store(StoreError::new(format!("malformed article row {id}: {err}")))
        };

        let views = u64::try_from(row.views.unwrap_or(0))
            .map_err(|_| malformed(DomainError::Validation("views cannot be negative".into())))?;

        Ok(Article {
            id: ArticleId::new(id),
            created_at: row.created_at,
            title: ArticleTitle::new(row.title).map_err(malformed)?,
            slug: ArticleSlug::new(row.slug).map_err(malformed)?,
            body_html: row.body_html,
            url: row.url,
            excerpt: row.excerpt,
            cover_image: row.cover_image,
            published: row.published,
            views,
            tags: row.tags.unwrap_or_default(),
        })
    }
}

pub(super) fn into_articles(rows: Vec<ArticleRow>) -> Result<Vec<Article>, DomainError> {
    rows.into_iter().map(Article::try_from).collect()
}

#[derive(Debug, Serialize)]
pub(super) struct NewArticleBody<'a> {
    title: &'a str,
    slug: &'a str,
    body_html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    excerpt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cover_image: Option<&'a str>,
    published: bool,
    tags: &'a [String],
}

impl<'a> From<&'a NewArticle> for NewArticleBody<'a> {
    fn from(article: &'a NewArticle) -> Self {
        Self {
            title: article.title.as_str(),
            slug: article.slug.as_str(),
            body_html: &article.body_html,
            url: article.url.as_deref(),
            excerpt: article.excerpt.as_deref(),
            cover_image: article.cover_image.as_deref(),
            published: article.published,
            tags: &article.tags,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ArticleChangesBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body_html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    excerpt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cover_image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
}

impl<'a> From<&'a ArticleChanges> for ArticleChangesBody<'a> {
    fn from(changes: &'a ArticleChanges) -> Self {
        Self {
            title: changes.title.as_ref().map(ArticleTitle::as_str),
            slug: changes.slug.as_ref().map(ArticleSlug::as_str),
            body_html: changes.body_html.as_deref(),
            url: changes.url.as_deref(),
            excerpt: changes.excerpt.as_deref(),
            cover_image: changes.cover_image.as_deref(),
            published: changes.published,
            tags: changes.tags.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_defaults_missing_views_and_tags() {
        let row: ArticleRow = serde_json::from_value(json!({
            "id": "7f2c1a4e-3d5b-4f6a-9c8d-0e1f2a3b4c5d",
            "created_at": "2024-03-01T10:00:00.123456+00:00",
            "title": "Hello",
            "slug": "hello",
            "body_html": "<p>hi</p>",
            "published": true,
            "views": null,
            "tags": null
        }))
        .unwrap();

        let article = Article::try_from(row).unwrap();
        assert_eq!(article.views, 0);
        assert!(article.tags.is_empty());
        assert!(article.url.is_none());
    }

    #[test]
    fn row_with_negative_views_is_a_store_error() {
        let row: ArticleRow = serde_json::from_value(json!({
            "id": "7f2c1a4e-3d5b-4f6a-9c8d-0e1f2a3b4c5d",
            "created_at": "2024-03-01T10:00:00Z",
            "title": "Hello",
            "slug": "hello",
            "body_html": "",
            "views": -1
        }))
        .unwrap();

        match Article::try_from(row) {
            Err(DomainError::Store(err)) => assert!(err.message.contains("negative"), "{err}"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn row_with_blank_title_is_a_store_error() {
        let row: ArticleRow = serde_json::from_value(json!({
            "id": "7f2c1a4e-3d5b-4f6a-9c8d-0e1f2a3b4c5d",
            "created_at": "2024-03-01T10:00:00Z",
            "title": " ",
            "slug": "hello",
            "body_html": ""
        }))
        .unwrap();

        match Article::try_from(row) {
            Err(DomainError::Store(err)) => {
                assert!(err.message.contains("7f2c1a4e-3d5b-4f6a-9c8d-0e1f2a3b4c5d"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn changes_body_skips_unset_fields() {
        let changes = ArticleChanges::default().with_published(true);
        let body = serde_json::to_value(ArticleChangesBody::from(&changes)).unwrap();
        assert_eq!(body, json!({ "published": true }));
    }

    #[test]
    fn select_columns_lists_every_column() {
        assert_eq!(
            select_columns(),
            "id, created_at, title, slug, body_html, url, excerpt, cover_image, published, views, tags"
        );
    }
}
