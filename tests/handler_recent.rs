mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use snaplink::AppState;
use snaplink::api::handlers::recent_handler;
use snaplink::domain::repositories::MappingStore;

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/recent", get(recent_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_recent_empty_store() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/api/recent").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_recent_is_newest_first_and_defaults_to_ten() {
    let (state, store) = common::create_test_state();
    for i in 0..12 {
        let code = format!("mapp{}", 2222 + i);
        let destination = format!("https://example.com/{i}");
        common::create_test_mapping(&store, &code, &destination).await;
    }

    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/api/recent").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["code"], "mapp2233");
    assert_eq!(items[0]["destination"], "https://example.com/11");
    assert_eq!(items[9]["code"], "mapp2224");
}

#[tokio::test]
async fn test_recent_honors_explicit_limit() {
    let (state, store) = common::create_test_state();
    for i in 0..5 {
        let code = format!("mapp{}", 2222 + i);
        common::create_test_mapping(&store, &code, "https://example.com").await;
    }

    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/api/recent?limit=3").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_recent_rejects_out_of_range_limits() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    server.get("/api/recent?limit=0").await.assert_status_bad_request();
    server
        .get("/api/recent?limit=200")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_recent_shows_current_counters_without_touching_them() {
    let (state, store) = common::create_test_state();
    common::create_test_mapping(&store, "aaaa2222", "https://example.com").await;
    store.increment_clicks("aaaa2222").await.unwrap();
    store.increment_clicks("aaaa2222").await.unwrap();

    let server = TestServer::new(app(state)).unwrap();

    let body: Value = server.get("/api/recent").await.json();
    assert_eq!(body["items"][0]["clicks"], 2);

    // Reading the feed must not move the counter.
    let mapping = store.find_by_code("aaaa2222").await.unwrap().unwrap();
    assert_eq!(mapping.clicks, 2);
}

#[tokio::test]
async fn test_recent_is_repeatable_without_writes() {
    let (state, store) = common::create_test_state();
    for code in ["aaaa2222", "bbbb3333"] {
        common::create_test_mapping(&store, code, "https://example.com").await;
    }

    let server = TestServer::new(app(state)).unwrap();

    let first: Value = server.get("/api/recent").await.json();
    let second: Value = server.get("/api/recent").await.json();

    assert_eq!(first, second);
}
