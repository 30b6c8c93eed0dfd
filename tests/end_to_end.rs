mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::{Value, json};
use snaplink::AppState;
use snaplink::api::handlers::{recent_handler, redirect_handler, shorten_handler};

fn app(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/api/recent", get(recent_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_full_shorten_resolve_history_flow() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    // Shorten a URL and take the allocated code.
    let created: Value = server
        .post("/api/shorten")
        .json(&json!({ "destination": "https://example.com/a" }))
        .await
        .json();
    let code = created["code"].as_str().unwrap().to_string();

    // First resolution redirects and counts the click.
    let response = server.get(&format!("/{code}")).await;
    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/a");

    let recent: Value = server.get("/api/recent").await.json();
    assert_eq!(recent["items"][0]["code"], code.as_str());
    assert_eq!(recent["items"][0]["clicks"], 1);

    // Second resolution moves the counter again.
    server
        .get(&format!("/{code}"))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    let recent: Value = server.get("/api/recent").await.json();
    assert_eq!(recent["items"][0]["clicks"], 2);

    // A code that was never allocated stays a clean 404.
    server.get("/doesnotexist").await.assert_status_not_found();
}

#[tokio::test]
async fn test_feed_orders_across_allocations() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let mut codes = Vec::new();
    for i in 0..3 {
        let created: Value = server
            .post("/api/shorten")
            .json(&json!({ "destination": format!("https://example.com/{i}") }))
            .await
            .json();
        codes.push(created["code"].as_str().unwrap().to_string());
    }

    let recent: Value = server.get("/api/recent").await.json();
    let listed: Vec<&str> = recent["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["code"].as_str().unwrap())
        .collect();

    let expected: Vec<&str> = codes.iter().rev().map(String::as_str).collect();
    assert_eq!(listed, expected);
}
