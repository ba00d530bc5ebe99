// src/infrastructure/repositories/postgres_article.rs
use super::error::map_sqlx;
use super::row::{ArticleRow, into_articles, select_columns};
use crate::domain::article::{
    Article, ArticleChanges, ArticleColumn, ArticleFilter, ArticleId, ArticleQuery, ArticleStore,
    FilterValue, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult, StoreError};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresArticleStore {
    pool: PgPool,
}

impl PostgresArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn by_id(id: ArticleId) -> ArticleQuery {
    ArticleQuery::new().eq(ArticleColumn::Id, id)
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn push_filter(builder: &mut QueryBuilder<'static, Postgres>, filter: &ArticleFilter) {
    match filter {
        ArticleFilter::Eq(column, value) => {
            builder.push(column.as_str());
            builder.push(" = ");
            match value {
                FilterValue::Bool(value) => builder.push_bind(*value),
                FilterValue::Text(value) => builder.push_bind(value.clone()),
                FilterValue::Id(id) => builder.push_bind(id.as_uuid()),
            };
        }
        ArticleFilter::ILikeAny { columns, needle } => {
            let pattern = format!("%{needle}%");
            builder.push("(");
            for (index, column) in columns.iter().enumerate() {
                if index > 0 {
                    builder.push(" OR ");
                }
                builder.push(column.as_str());
                builder.push(" ILIKE ");
                builder.push_bind(pattern.clone());
            }
            builder.push(")");
        }
        ArticleFilter::Contains(column, values) => {
            builder.push(column.as_str());
            builder.push(" @> ");
            builder.push_bind(values.clone());
        }
    }
}

/// Renders an [`ArticleQuery`] as a parameterized `SELECT`.
pub(crate) fn build_select(query: &ArticleQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {} FROM articles", select_columns()));

    for (index, filter) in query.filters().iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        push_filter(&mut builder, filter);
    }

    if let Some(order) = query.ordering() {
        builder.push(" ORDER BY ");
        builder.push(order.column.as_str());
        builder.push(if order.ascending { " ASC" } else { " DESC" });
    }
    if let Some(limit) = query.row_limit() {
        builder.push(" LIMIT ");
        builder.push_bind(to_i64(limit));
    }
    if let Some(offset) = query.row_offset() {
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(offset));
    }

    builder
}

/// Renders a partial `UPDATE ... RETURNING`; `None` when there is nothing to set.
pub(crate) fn build_update(
    id: ArticleId,
    changes: ArticleChanges,
) -> Option<QueryBuilder<'static, Postgres>> {
    if changes.is_empty() {
        return None;
    }

    let ArticleChanges {
        title,
        slug,
        body_html,
        url,
        excerpt,
        cover_image,
        published,
        tags,
    } = changes;

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET ");
    {
        let mut set = builder.separated(", ");

        if let Some(title) = title {
            set.push("title = ");
            set.push_bind_unseparated(String::from(title));
        }
        if let Some(slug) = slug {
            set.push("slug = ");
            set.push_bind_unseparated(String::from(slug));
        }
        if let Some(body_html) = body_html {
            set.push("body_html = ");
            set.push_bind_unseparated(body_html);
        }
        if let Some(url) = url {
            set.push("url = ");
            set.push_bind_unseparated(url);
        }
        if let Some(excerpt) = excerpt {
            set.push("excerpt = ");
            set.push_bind_unseparated(excerpt);
        }
        if let Some(cover_image) = cover_image {
            set.push("cover_image = ");
            set.push_bind_unseparated(cover_image);
        }
        if let Some(published) = published {
            set.push("published = ");
            set.push_bind_unseparated(published);
        }
        if let Some(tags) = tags {
            set.push("tags = ");
            set.push_bind_unseparated(tags);
        }
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id.as_uuid());
    builder.push(format!(" RETURNING {}", select_columns()));
    Some(builder)
}

#[async_trait]
impl ArticleStore for PostgresArticleStore {
    async fn select(&self, query: &ArticleQuery) -> DomainResult<Vec<Article>> {
        let rows = build_select(query)
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn select_single(&self, query: &ArticleQuery) -> DomainResult<Article> {
        let mut rows = build_select(query)
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if rows.len() > 1 {
            return Err(DomainError::Store(StoreError::new(format!(
                "single article requested, {} rows returned",
                rows.len()
            ))));
        }
        let row = rows
            .pop()
            .ok_or_else(|| DomainError::NotFound("no article matched the request".into()))?;
        Article::try_from(row)
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            body_html,
            url,
            excerpt,
            cover_image,
            published,
            tags,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, slug, body_html, url, excerpt, cover_image, published, tags)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {}",
            select_columns()
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(body_html)
        .bind(url)
        .bind(excerpt)
        .bind(cover_image)
        .bind(published)
        .bind(tags)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, id: ArticleId, changes: ArticleChanges) -> DomainResult<Article> {
        let Some(mut builder) = build_update(id, changes) else {
            return self.select_single(&by_id(id)).await;
        };

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("SELECT increment_views($1)")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
