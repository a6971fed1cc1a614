use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;
use wordbook::api::create_router;
use wordbook::domain::word::{SqliteWordRepository, WordEntry, WordRecord, WordRepository};
use wordbook::error::AppError;
use wordbook::storage::connect_in_memory;
use wordbook::utils::state::AppState;

async fn seeded_app() -> (Router, Arc<SqlitePool>) {
    let pool = Arc::new(connect_in_memory().await.unwrap());
    SqliteWordRepository::new(pool.clone())
        .replace_all(&[
            WordRecord::new(
                "A",
                vec![WordEntry::new("Ant", "u1"), WordEntry::new("Apple", "u2")],
            ),
            WordRecord::new("B", vec![]),
        ])
        .await
        .unwrap();
    let app = create_router(Arc::new(AppState::new(pool.clone())));
    (app, pool)
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, headers, body)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::GET, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_word_for_lowercase_letter() {
    let (app, _pool) = seeded_app().await;
    let (status, body) = get_json(&app, "/api/words/a").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["letter"], "A");
    let pair = (body["word"].as_str().unwrap(), body["imageUrl"].as_str().unwrap());
    assert!(pair == ("Ant", "u1") || pair == ("Apple", "u2"), "unexpected pair {pair:?}");
}

#[tokio::test]
async fn test_every_response_is_a_stored_pair() {
    let (app, _pool) = seeded_app().await;
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let (status, body) = get_json(&app, "/api/words/A").await;
        assert_eq!(status, StatusCode::OK);
        let word = body["word"].as_str().unwrap().to_string();
        let url = body["imageUrl"].as_str().unwrap();
        match word.as_str() {
            "Ant" => assert_eq!(url, "u1"),
            "Apple" => assert_eq!(url, "u2"),
            other => panic!("{other} is not in the seed data"),
        }
        seen.insert(word);
    }
    // 200 independent draws over two entries miss one with probability 2^-199.
    assert_eq!(seen.len(), 2);
}

#[tokio::test]
async fn test_unknown_letter_is_word_not_found() {
    let (app, _pool) = seeded_app().await;
    for uri in ["/api/words/Z", "/api/words/z", "/api/words/AB", "/api/words/%C3%9F"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, serde_json::json!({ "error": "Word not found" }));
    }
}

#[tokio::test]
async fn test_empty_record_is_no_words_available() {
    let (app, _pool) = seeded_app().await;
    let (status, body) = get_json(&app, "/api/words/b").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        serde_json::json!({ "error": "No words available for this letter" })
    );
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let (app, pool) = seeded_app().await;
    pool.close().await;

    let (status, body) = get_json(&app, "/api/words/a").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
}

struct UnreachableStore;

#[async_trait::async_trait]
impl WordRepository for UnreachableStore {
    async fn find_by_letter(&self, _letter: &str) -> Result<Option<WordRecord>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn replace_all(&self, _records: &[WordRecord]) -> Result<(), AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn count_records(&self) -> Result<u64, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

#[tokio::test]
async fn test_store_timeout_is_internal_error() {
    let app = create_router(Arc::new(AppState::with_repository(Arc::new(UnreachableStore))));

    let (status, body) = get_json(&app, "/api/words/a").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));

    let (status, _) = get_json(&app, "/api/test").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_liveness_survives_broken_store() {
    let (app, pool) = seeded_app().await;
    pool.close().await;

    let (status, body) = get_json(&app, "/api/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "message": "API is working" }));
}

#[tokio::test]
async fn test_post_looks_up_like_get() {
    let (app, _pool) = seeded_app().await;
    let (status, _, body) = send(&app, Method::POST, "/api/words/a").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["letter"], "A");

    let (status, _, _) = send(&app, Method::POST, "/api/words/z").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_lookups_return_stored_pairs() {
    let (app, _pool) = seeded_app().await;
    let mut handles = Vec::new();
    for i in 0..64 {
        let app = app.clone();
        let uri = if i % 2 == 0 { "/api/words/a" } else { "/api/words/A" };
        handles.push(tokio::spawn(async move { get_json(&app, uri).await }));
    }

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["letter"], "A");
        let pair = (body["word"].as_str().unwrap(), body["imageUrl"].as_str().unwrap());
        assert!(pair == ("Ant", "u1") || pair == ("Apple", "u2"), "unexpected pair {pair:?}");
    }
}

#[tokio::test]
async fn test_cors_headers_on_responses() {
    let (app, _pool) = seeded_app().await;
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/words/Z")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(headers["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_preflight_is_empty_ok() {
    let (app, _pool) = seeded_app().await;
    for uri in ["/api/words/a", "/api/test"] {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "GET")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send_request(&app, request).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.is_empty());
        assert_eq!(headers["access-control-allow-origin"], "*");

        let methods = headers["access-control-allow-methods"].to_str().unwrap();
        let methods: Vec<_> = methods.split(',').map(str::trim).collect();
        for method in ["GET", "POST", "OPTIONS"] {
            assert!(methods.contains(&method), "{method} missing from {methods:?}");
        }
        let allowed_headers = headers["access-control-allow-headers"].to_str().unwrap();
        assert!(allowed_headers.eq_ignore_ascii_case("content-type"));
    }
}
