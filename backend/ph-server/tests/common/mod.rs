#![allow(dead_code)]

//! Test infrastructure for ph-server API tests

use ph_config::PublicProfileConfig;
use ph_core::PublicCode;
use ph_db::MIGRATOR;
use ph_server::{AppState, ImageStore};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub const PUBLIC_BASE_URL: &str = "https://pub.example/public-profile";
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024;

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}

/// Create AppState for testing; the TempDir holds uploaded images and must
/// outlive the state.
pub async fn create_test_app_state() -> (TempDir, AppState) {
    let uploads = TempDir::new().expect("Failed to create upload dir");
    let pool = create_test_pool().await;

    let state = AppState {
        pool,
        image_store: ImageStore::new(uploads.path(), "uploads"),
        public_profile: PublicProfileConfig {
            base_url: PUBLIC_BASE_URL.to_string(),
        },
        max_upload_bytes: MAX_UPLOAD_BYTES,
    };

    (uploads, state)
}

/// Send one request through a fresh router and return status plus raw body
pub async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// Send one request and parse the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send_raw(app, request).await;
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// One part of a multipart/form-data body
pub enum FormPart<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_request(method: &str, uri: &str, parts: &[FormPart<'_>]) -> Request<Body> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            FormPart::Text(name, value) => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                    .as_bytes(),
            ),
            FormPart::File {
                name,
                file_name,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: image/png\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Register through the API and return the new id
pub async fn register_user(state: &AppState, name: &str, email: &str, password: &str) -> Uuid {
    let (status, json) = send(
        ph_server::build_router(state.clone()),
        json_request(
            "POST",
            "/api/register",
            serde_json::json!({ "name": name, "email": email, "password": password }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    Uuid::parse_str(json["userId"].as_str().unwrap()).unwrap()
}

/// Decode the QR payload carried by a `data:image/png;base64,` URI
pub fn decode_qr(data_uri: &str) -> String {
    let png = PublicCode::from(data_uri.to_string()).png_bytes().unwrap();
    let img = image::load_from_memory(&png).unwrap().to_luma8();

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32)[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code");

    let (_meta, content) = grids[0].decode().unwrap();
    content
}
