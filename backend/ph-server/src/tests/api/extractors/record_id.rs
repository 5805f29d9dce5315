use crate::RecordId;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use tower::ServiceExt;
use uuid::Uuid;

async fn echo(RecordId(id): RecordId) -> String {
    id.to_string()
}

fn app() -> Router {
    Router::new().route("/items/{id}", get(echo))
}

#[tokio::test]
async fn test_uuid_segment_is_extracted() {
    let id = Uuid::new_v4();
    let request = Request::builder()
        .uri(format!("/items/{}", id))
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_non_uuid_segment_is_not_found() {
    let request = Request::builder()
        .uri("/items/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

