// src/application/articles/create.rs
use super::{ArticleService, failure::report};
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleSlug, ArticleTitle, NewArticle},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateArticleCommand {
    pub title: String,
    pub slug: String,
    pub body_html: String,
    pub url: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
    pub tags: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    body_html: Option<String>,
    url: Option<String>,
    excerpt: Option<String>,
    cover_image: Option<String>,
    published: Option<bool>,
    tags: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn body_html(mut self, body_html: impl Into<String>) -> Self {
        self.body_html = Some(body_html.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug.ok_or("slug is required")?,
            body_html: self.body_html.unwrap_or_default(),
            url: self.url,
            excerpt: self.excerpt,
            cover_image: self.cover_image,
            published: self.published,
            tags: self.tags,
        })
    }
}

impl CreateArticleCommand {
    fn into_new_article(self) -> ApplicationResult<NewArticle> {
        let mut article = NewArticle::new(
            ArticleTitle::new(self.title)?,
            ArticleSlug::new(self.slug)?,
            self.body_html,
        );
        article.url = self.url;
        article.excerpt = self.excerpt;
        article.cover_image = self.cover_image;
        article.published = self.published.unwrap_or(false);
        article.tags = self.tags;
        Ok(article)
    }
}

impl ArticleService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<Article> {
        let new_article = command.into_new_article().inspect_err(|err| {
            tracing::error!(operation = "create_article", error = %err, "invalid article");
        })?;

        self.store
            .insert(new_article)
            .await
            .map_err(|err| report("create_article", err))
    }
}
