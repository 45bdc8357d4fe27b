use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use rollcall::config::cors::CorsConfig;
use rollcall::i18n::MessageCatalog;
use rollcall::modules::students::service::InMemoryStudentService;
use rollcall::router::init_router;
use rollcall::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

/// Builds the full router over the in-memory student service, so tests
/// exercise the HTTP surface without a database.
pub fn setup_test_app() -> axum::Router {
    let state = AppState {
        students: Arc::new(InMemoryStudentService::new()),
        messages: Arc::new(MessageCatalog::new()),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

pub fn student_payload(first_name: &str, last_name: &str, email: &str) -> serde_json::Value {
    json!({
        "first_name": first_name,
        "last_name": last_name,
        "email": email
    })
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Creates a student through the API and returns the response envelope.
#[allow(dead_code)]
pub async fn create_student(
    app: &axum::Router,
    payload: &serde_json::Value,
) -> serde_json::Value {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/students")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    read_json(response).await
}
