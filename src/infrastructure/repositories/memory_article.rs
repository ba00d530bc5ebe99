// src/infrastructure/repositories/memory_article.rs
//! Process-local article store evaluating [`ArticleQuery`] over a vector.
//!
//! Used for local runs without a database and as the substitutable fake in
//! tests. Rows keep insertion order, sorting is stable, and slug uniqueness is
//! enforced with the same SQLSTATE a Postgres-backed store reports.

use crate::domain::article::{
    Article, ArticleChanges, ArticleColumn, ArticleFilter, ArticleId, ArticleQuery, ArticleStore,
    FilterValue, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Ordering;
use std::sync::{
    RwLock,
    atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering},
};
use uuid::Uuid;

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Default)]
pub struct InMemoryArticleStore {
    rows: RwLock<Vec<Article>>,
    fail_increments: AtomicBool,
    increment_calls: AtomicUsize,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `articles` as-is, including their ids and timestamps.
    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let store = Self::new();
        for article in articles {
            store.seed(article);
        }
        store
    }

    pub fn seed(&self, article: Article) {
        self.write_rows().push(article);
    }

    /// Makes every subsequent `increment_views` call fail.
    pub fn fail_increments(&self, fail: bool) {
        self.fail_increments.store(fail, AtomicOrdering::SeqCst);
    }

    /// Number of `increment_views` calls received, failed ones included.
    pub fn increment_calls(&self) -> usize {
        self.increment_calls.load(AtomicOrdering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.read_rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_rows(&self) -> std::sync::RwLockReadGuard<'_, Vec<Article>> {
        self.rows.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_rows(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Article>> {
        self.rows.write().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn run(&self, query: &ArticleQuery) -> Vec<Article> {
        let mut matched: Vec<Article> = self
            .read_rows()
            .iter()
            .filter(|article| query.filters().iter().all(|f| filter_matches(f, article)))
            .cloned()
            .collect();

        if let Some(order) = query.ordering() {
            matched.sort_by(|a, b| {
                let ordering = compare(order.column, a, b);
                if order.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }

        let offset = usize::try_from(query.row_offset().unwrap_or(0)).unwrap_or(usize::MAX);
        let limit = query
            .row_limit()
            .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));

        matched.into_iter().skip(offset).take(limit).collect()
    }
}

fn duplicate_slug(slug: &str) -> DomainError {
    DomainError::Store(
        StoreError::new("duplicate key value violates unique constraint \"articles_slug_key\"")
            .with_code(UNIQUE_VIOLATION)
            .with_details(format!("Key (slug)=({slug}) already exists.")),
    )
}

fn text_value(column: ArticleColumn, article: &Article) -> Option<&str> {
    match column {
        ArticleColumn::Title => Some(article.title.as_str()),
        ArticleColumn::Slug => Some(article.slug.as_str()),
        ArticleColumn::BodyHtml => Some(&article.body_html),
        ArticleColumn::Url => article.url.as_deref(),
        ArticleColumn::Excerpt => article.excerpt.as_deref(),
        ArticleColumn::CoverImage => article.cover_image.as_deref(),
        ArticleColumn::Id
        | ArticleColumn::CreatedAt
        | ArticleColumn::Published
        | ArticleColumn::Views
        | ArticleColumn::Tags => None,
    }
}

fn filter_matches(filter: &ArticleFilter, article: &Article) -> bool {
    match filter {
        ArticleFilter::Eq(ArticleColumn::Published, FilterValue::Bool(value)) => {
            article.published == *value
        }
        ArticleFilter::Eq(ArticleColumn::Id, FilterValue::Id(id)) => article.id == *id,
        ArticleFilter::Eq(column, FilterValue::Text(value)) => {
            text_value(*column, article) == Some(value.as_str())
        }
        ArticleFilter::Eq(..) => false,
        ArticleFilter::ILikeAny { columns, needle } => {
            let pattern = like_tokens(&format!("%{needle}%"));
            columns.iter().any(|column| {
                text_value(*column, article).is_some_and(|value| ilike(value, &pattern))
            })
        }
        ArticleFilter::Contains(ArticleColumn::Tags, values) => {
            values.iter().all(|value| article.has_tag(value))
        }
        ArticleFilter::Contains(..) => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LikeToken {
    AnySequence,
    AnyChar,
    Literal(char),
}

/// Tokenizes a SQL `LIKE` pattern: `%`, `_`, and `\` escaping the next character.
fn like_tokens(pattern: &str) -> Vec<LikeToken> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().flat_map(char::to_lowercase);
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => LikeToken::AnySequence,
            '_' => LikeToken::AnyChar,
            '\\' => LikeToken::Literal(chars.next().unwrap_or('\\')),
            other => LikeToken::Literal(other),
        });
    }
    tokens
}

/// Case-insensitive match of `value` against a tokenized `LIKE` pattern.
fn ilike(value: &str, pattern: &[LikeToken]) -> bool {
    let text: Vec<char> = value.chars().flat_map(char::to_lowercase).collect();
    let (mut t, mut p) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some(LikeToken::AnySequence) => {
                backtrack = Some((p, t));
                p += 1;
                continue;
            }
            Some(LikeToken::AnyChar) => {
                t += 1;
                p += 1;
                continue;
            }
            Some(LikeToken::Literal(c)) if *c == text[t] => {
                t += 1;
                p += 1;
                continue;
            }
            _ => {}
        }
        match backtrack {
            Some((star, from)) => {
                p = star + 1;
                t = from + 1;
                backtrack = Some((star, from + 1));
            }
            None => return false,
        }
    }

    pattern[p..].iter().all(|token| *token == LikeToken::AnySequence)
}

fn compare(column: ArticleColumn, a: &Article, b: &Article) -> Ordering {
    match column {
        ArticleColumn::Id => a.id.cmp(&b.id),
        ArticleColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        ArticleColumn::Published => a.published.cmp(&b.published),
        ArticleColumn::Views => a.views.cmp(&b.views),
        ArticleColumn::Tags => a.tags.cmp(&b.tags),
        text => text_value(text, a).cmp(&text_value(text, b)),
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn select(&self, query: &ArticleQuery) -> DomainResult<Vec<Article>> {
        Ok(self.run(query))
    }

    async fn select_single(&self, query: &ArticleQuery) -> DomainResult<Article> {
        let mut rows = self.run(query);
        if rows.len() > 1 {
            return Err(DomainError::Store(StoreError::new(format!(
                "single article requested, {} rows returned",
                rows.len()
            ))));
        }
        rows.pop()
            .ok_or_else(|| DomainError::NotFound("no article matched the request".into()))
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut rows = self.write_rows();
        if rows.iter().any(|row| row.slug == article.slug) {
            return Err(duplicate_slug(article.slug.as_str()));
        }

        let created = Article {
            id: ArticleId::new(Uuid::new_v4()),
            created_at: Utc::now(),
            title: article.title,
            slug: article.slug,
            body_html: article.body_html,
            url: article.url,
            excerpt: article.excerpt,
            cover_image: article.cover_image,
            published: article.published,
            views: 0,
            tags: article.tags,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: ArticleId, changes: ArticleChanges) -> DomainResult<Article> {
        let mut rows = self.write_rows();
        if let Some(slug) = &changes.slug {
            if rows.iter().any(|row| row.id != id && &row.slug == slug) {
                return Err(duplicate_slug(slug.as_str()));
            }
        }

        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        changes.apply_to(row);
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut rows = self.write_rows();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        self.increment_calls.fetch_add(1, AtomicOrdering::SeqCst);
        if self.fail_increments.load(AtomicOrdering::SeqCst) {
            return Err(DomainError::Store(StoreError::new(
                "function increment_views(uuid) is unavailable",
            )));
        }

        if let Some(row) = self.write_rows().iter_mut().find(|row| row.id == id) {
            row.views += 1;
        }
        Ok(())
    }
}
