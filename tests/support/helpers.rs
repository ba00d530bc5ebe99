// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

use folio_core::application::articles::ArticleService;
use folio_core::domain::article::{Article, ArticleStore};
use folio_core::infrastructure::repositories::InMemoryArticleStore;
use folio_core::presentation::http::{routes::build_router, state::HttpState};

pub fn memory_store(articles: impl IntoIterator<Item = Article>) -> Arc<InMemoryArticleStore> {
    Arc::new(InMemoryArticleStore::with_articles(articles))
}

pub fn service_over(store: Arc<dyn ArticleStore>) -> ArticleService {
    ArticleService::new(store)
}

pub fn make_test_router(store: Arc<dyn ArticleStore>) -> axum::Router {
    build_router(HttpState::new(Arc::new(ArticleService::new(store))))
}

/// Issues a GET and returns the status with the decoded JSON body.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let content_type = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("invalid json ({err}): {}", String::from_utf8_lossy(&bytes)));
    (status, value)
}

pub fn slugs(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array body")
        .iter()
        .map(|item| item["slug"].as_str().unwrap().to_owned())
        .collect()
}
