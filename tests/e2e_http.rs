// tests/e2e_http.rs
use std::sync::Arc;

use axum::http::StatusCode;

mod support;
use support::{ArticleBuilder, FailingStore, get_json, make_test_router, memory_store, slugs};

fn seeded_router() -> (axum::Router, Arc<folio_core::infrastructure::repositories::InMemoryArticleStore>) {
    let store = memory_store([
        ArticleBuilder::new("hello-world")
            .title("Hello World")
            .published()
            .views(12)
            .hours_after_epoch(1)
            .tag("rust")
            .build(),
        ArticleBuilder::new("later")
            .published()
            .views(2)
            .hours_after_epoch(5)
            .tag("rust")
            .build(),
        ArticleBuilder::new("secret-draft")
            .title("Hello draft")
            .hours_after_epoch(9)
            .tag("rust")
            .build(),
    ]);
    (make_test_router(store.clone()), store)
}

#[tokio::test]
async fn health_returns_ok() {
    let (app, _) = seeded_router();
    let (status, body) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let direct = folio_core::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn index_lists_published_articles_newest_first() {
    let (app, _) = seeded_router();
    let (status, body) = get_json(app, "/articles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body), ["later", "hello-world"]);
    assert!(body[0]["created_at"].as_str().is_some());
}

#[tokio::test]
async fn listing_routes_hide_drafts() {
    let (app, _) = seeded_router();

    let (_, search) = get_json(app.clone(), "/articles/search?q=hello").await;
    assert_eq!(slugs(&search), ["hello-world"]);

    let (_, tagged) = get_json(app.clone(), "/articles/tags/rust").await;
    assert_eq!(slugs(&tagged), ["later", "hello-world"]);

    let (_, popular) = get_json(app.clone(), "/articles/popular?limit=1").await;
    assert_eq!(slugs(&popular), ["hello-world"]);

    let (_, recent) = get_json(app, "/articles/recent").await;
    assert_eq!(slugs(&recent), ["later", "hello-world"]);
}

#[tokio::test]
async fn blank_search_returns_empty_list() {
    let (app, _) = seeded_router();
    let (status, body) = get_json(app, "/articles/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn malformed_limit_falls_back_to_default() {
    let (app, _) = seeded_router();
    let (status, body) = get_json(app, "/articles/popular?limit=lots").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body), ["hello-world", "later"]);
}

#[tokio::test]
async fn listing_routes_degrade_to_empty_on_store_failure() {
    let store = Arc::new(FailingStore::default());
    let app = make_test_router(store.clone());

    for uri in [
        "/articles",
        "/articles/search?q=hello",
        "/articles/tags/rust",
        "/articles/popular",
        "/articles/recent?limit=2",
    ] {
        let (status, body) = get_json(app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, serde_json::json!([]), "{uri}");
    }
    assert_eq!(store.calls(), 5);
}

#[tokio::test]
async fn article_page_serves_published_article_and_counts_view() {
    let (app, store) = seeded_router();
    let (status, body) = get_json(app, "/articles/hello-world").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "hello-world");
    assert_eq!(body["views"], 12);
    assert_eq!(store.increment_calls(), 1);
}

#[tokio::test]
async fn article_page_is_not_found_for_drafts_and_unknown_slugs() {
    let (app, store) = seeded_router();

    for uri in ["/articles/secret-draft", "/articles/nope"] {
        let (status, body) = get_json(app.clone(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Not Found");
        assert!(body["message"].as_str().is_some());
    }
    assert_eq!(store.increment_calls(), 1, "only the fetched draft is counted");
}

#[tokio::test]
async fn article_page_is_not_found_when_store_fails() {
    let app = make_test_router(Arc::new(FailingStore::default()));
    let (status, body) = get_json(app, "/articles/hello-world").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}
