// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub created_at: DateTime<Utc>,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body_html: String,
    pub url: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
    pub views: u64,
    pub tags: Vec<String>,
}

impl Article {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Insert payload. `id`, `created_at` and `views` are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body_html: String,
    pub url: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: bool,
    pub tags: Vec<String>,
}

impl NewArticle {
    pub fn new(title: ArticleTitle, slug: ArticleSlug, body_html: impl Into<String>) -> Self {
        Self {
            title,
            slug,
            body_html: body_html.into(),
            url: None,
            excerpt: None,
            cover_image: None,
            published: false,
            tags: Vec::new(),
        }
    }
}

/// Partial update. Has no `views` field: the counter only moves through the
/// store's increment procedure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleChanges {
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub body_html: Option<String>,
    pub url: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl ArticleChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    /// Applies the changes in place, used by stores that hold rows in memory.
    pub fn apply_to(self, article: &mut Article) {
        let Self {
            title,
            slug,
            body_html,
            url,
            excerpt,
            cover_image,
            published,
            tags,
        } = self;

        if let Some(title) = title {
            article.title = title;
        }
        if let Some(slug) = slug {
            article.slug = slug;
        }
        if let Some(body_html) = body_html {
            article.body_html = body_html;
        }
        if url.is_some() {
            article.url = url;
        }
        if excerpt.is_some() {
            article.excerpt = excerpt;
        }
        if cover_image.is_some() {
            article.cover_image = cover_image;
        }
        if let Some(published) = published {
            article.published = published;
        }
        if let Some(tags) = tags {
            article.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(Uuid::new_v4()),
            created_at: Utc::now(),
            title: ArticleTitle::new("title").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            body_html: "<p>body</p>".into(),
            url: None,
            excerpt: None,
            cover_image: None,
            published: false,
            views: 3,
            tags: vec!["rust".into()],
        }
    }

    #[test]
    fn empty_changes_are_detected() {
        assert!(ArticleChanges::default().is_empty());
        assert!(!ArticleChanges::default().with_published(true).is_empty());
    }

    #[test]
    fn apply_to_only_touches_set_fields() {
        let mut article = sample_article();
        let original = article.clone();
        ArticleChanges::default()
            .with_title(ArticleTitle::new("new title").unwrap())
            .with_published(true)
            .apply_to(&mut article);

        assert_eq!(article.title.as_str(), "new title");
        assert!(article.published);
        assert_eq!(article.slug, original.slug);
        assert_eq!(article.views, original.views);
        assert_eq!(article.tags, original.tags);
    }

    #[test]
    fn has_tag_matches_exactly() {
        let article = sample_article();
        assert!(article.has_tag("rust"));
        assert!(!article.has_tag("Rust"));
    }
}
