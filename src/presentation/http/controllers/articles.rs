// src/presentation/http/controllers/articles.rs
//! Public read routes. Listing routes degrade to an empty list when the store
//! fails; the article page answers 404 for anything it cannot show.

use crate::application::{
    ApplicationResult,
    articles::ListArticlesQuery,
    dto::ArticleDto,
};
use crate::domain::article::Article;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::QueryRejection},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    #[serde(default)]
    pub limit: Option<u64>,
}

fn or_empty(route: &'static str, result: ApplicationResult<Vec<Article>>) -> Json<Vec<ArticleDto>> {
    match result {
        Ok(articles) => Json(articles.into_iter().map(ArticleDto::from).collect()),
        Err(err) => {
            tracing::error!(route, error = %err, "listing unavailable, serving empty list");
            Json(Vec::new())
        }
    }
}

fn params_or_default<T: Default>(route: &'static str, params: Result<Query<T>, QueryRejection>) -> T {
    match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::warn!(route, error = %rejection, "ignoring malformed query string");
            T::default()
        }
    }
}

pub async fn list_articles(Extension(state): Extension<HttpState>) -> Json<Vec<ArticleDto>> {
    let result = state
        .articles
        .list_articles(ListArticlesQuery::published())
        .await;
    or_empty("list_articles", result)
}

pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Json<Vec<ArticleDto>> {
    let params = params_or_default("search_articles", params);
    let Some(term) = params.q.filter(|q| !q.trim().is_empty()) else {
        return Json(Vec::new());
    };
    let result = state.articles.search_articles(term.trim()).await;
    or_empty("search_articles", result)
}

pub async fn articles_by_tag(
    Extension(state): Extension<HttpState>,
    Path(tag): Path<String>,
) -> Json<Vec<ArticleDto>> {
    let result = state.articles.articles_by_tag(&tag).await;
    or_empty("articles_by_tag", result)
}

pub async fn popular_articles(
    Extension(state): Extension<HttpState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Json<Vec<ArticleDto>> {
    let params = params_or_default("popular_articles", params);
    let result = state.articles.popular_articles(params.limit).await;
    or_empty("popular_articles", result)
}

pub async fn recent_articles(
    Extension(state): Extension<HttpState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Json<Vec<ArticleDto>> {
    let params = params_or_default("recent_articles", params);
    let result = state.articles.recent_articles(params.limit).await;
    or_empty("recent_articles", result)
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    match state.articles.get_article_by_slug(&slug).await.into_http() {
        Ok(article) => Ok(Json(ArticleDto::from(article))),
        Err(err) => {
            tracing::warn!(%slug, status = %err.status(), "article page unavailable");
            Err(HttpError::not_found(format!(
                "no published article with slug `{slug}`"
            )))
        }
    }
}
