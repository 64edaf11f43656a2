#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use task_tracker_api::config::ServerConfig;
use task_tracker_api::router::build_app_router;
use task_tracker_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_router(AppState { pool }, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// POST a raw body with an arbitrary content type.
pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a quest through the API and return its ID.
pub async fn create_quest(pool: &PgPool, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/quests",
        serde_json::json!({"QuestTitle": title, "QuestDescription": "A quest"}),
    )
    .await;
    body_json(response).await["QuestID"].as_i64().unwrap()
}

/// Create a student through the API and return its ID.
pub async fn create_student(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/students",
        serde_json::json!({"StudentName": name, "StudentCohort": "2024-A"}),
    )
    .await;
    body_json(response).await["StudentID"].as_i64().unwrap()
}

/// Create a mission through the API and return its ID.
pub async fn create_mission(pool: &PgPool, quest_id: i64, student_id: i64, due: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/missions",
        serde_json::json!({
            "QuestID": quest_id,
            "StudentID": student_id,
            "MissionTitle": "Mission",
            "MissionDescription": "Do the thing",
            "MissionDueDate": due,
        }),
    )
    .await;
    body_json(response).await["MissionID"].as_i64().unwrap()
}
