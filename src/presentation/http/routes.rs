// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, routing::get};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/articles", get(articles::list_articles))
        .route("/articles/search", get(articles::search_articles))
        .route("/articles/popular", get(articles::popular_articles))
        .route("/articles/recent", get(articles::recent_articles))
        .route("/articles/tags/{tag}", get(articles::articles_by_tag))
        .route("/articles/{slug}", get(articles::get_article_by_slug))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
