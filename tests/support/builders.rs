// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use folio_core::domain::article::*;

/// Fixed reference instant so ordering assertions do not depend on the clock.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

pub struct ArticleBuilder {
    id: Uuid,
    created_at: DateTime<Utc>,
    title: String,
    slug: String,
    body_html: String,
    excerpt: Option<String>,
    published: bool,
    views: u64,
    tags: Vec<String>,
}

impl ArticleBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: epoch(),
            title: format!("Article {slug}"),
            slug: slug.into(),
            body_html: "<p>body</p>".into(),
            excerpt: None,
            published: false,
            views: 0,
            tags: Vec::new(),
        }
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    /// Shifts `created_at` by `hours` after [`epoch`].
    pub fn hours_after_epoch(mut self, hours: i64) -> Self {
        self.created_at = epoch() + Duration::hours(hours);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id),
            created_at: self.created_at,
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            body_html: self.body_html,
            url: None,
            excerpt: self.excerpt,
            cover_image: None,
            published: self.published,
            views: self.views,
            tags: self.tags,
        }
    }
}
