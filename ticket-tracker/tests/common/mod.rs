use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    response::Response,
    Router,
};
use local_storage::MemoryStorage;
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use ticket_tracker::application;
use tower::ServiceExt;

pub async fn create_app() -> Router {
    create_app_with_storage(Arc::new(MemoryStorage::new())).await
}

pub async fn create_app_with_storage(storage: Arc<MemoryStorage>) -> Router {
    let state = application::create_state_with_storage(storage, Duration::ZERO).await;
    let middleware = application::create_middleware(state.auth_store.clone());

    application::create_application(state, middleware)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

pub async fn login_test_user(app: &Router) -> Value {
    let credentials = json!({
        "email": "test@example.com",
        "password": "password123",
    });
    let response = send(app, Method::POST, "/api/v1/auth/login", Some(credentials)).await;
    assert_eq!(response.status(), StatusCode::OK);

    json_body(response).await
}

pub async fn create_ticket(app: &Router, title: &str, status: &str) -> Value {
    let form = json!({
        "title": title,
        "description": "created in test",
        "status": status,
        "priority": "medium",
    });
    let response = send(app, Method::POST, "/api/v1/tickets", Some(form)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    json_body(response).await
}
