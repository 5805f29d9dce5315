use crate::{ApiError, ProfileForm};

use ph_core::FieldUpdate;

use axum::{
    body::Body,
    extract::{FromRequest, Multipart},
    http::Request,
};
use chrono::NaiveDate;

const BOUNDARY: &str = "form-boundary";

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

async fn multipart(parts: &[Part<'_>]) -> Multipart {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File(name, file_name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("PUT")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    Multipart::from_request(request, &()).await.unwrap()
}

#[tokio::test]
async fn test_omitted_fields_are_kept() {
    let form = ProfileForm::read(multipart(&[Part::Text("name", "Alice B")]).await)
        .await
        .unwrap();

    let (update, image) = form.into_update().unwrap();

    assert_eq!(update.name, FieldUpdate::Set("Alice B".to_string()));
    assert_eq!(update.date_of_birth, FieldUpdate::Keep);
    assert_eq!(update.phone_number, FieldUpdate::Keep);
    assert!(image.is_none());
}

#[tokio::test]
async fn test_blank_fields_clear() {
    let form = ProfileForm::read(
        multipart(&[Part::Text("phoneNumber", "  "), Part::Text("dateOfBirth", "")]).await,
    )
    .await
    .unwrap();

    let (update, _) = form.into_update().unwrap();

    assert_eq!(update.phone_number, FieldUpdate::Clear);
    assert_eq!(update.date_of_birth, FieldUpdate::Clear);
}

#[tokio::test]
async fn test_date_of_birth_is_parsed() {
    let form = ProfileForm::read(multipart(&[Part::Text("dateOfBirth", "1990-04-12")]).await)
        .await
        .unwrap();

    let (update, _) = form.into_update().unwrap();

    assert_eq!(
        update.date_of_birth,
        FieldUpdate::Set(NaiveDate::from_ymd_opt(1990, 4, 12).unwrap())
    );
}

#[tokio::test]
async fn test_invalid_date_is_validation_error() {
    let form = ProfileForm::read(multipart(&[Part::Text("dateOfBirth", "12/04/1990")]).await)
        .await
        .unwrap();

    let result = form.into_update();

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn test_empty_file_part_is_ignored() {
    let form = ProfileForm::read(multipart(&[Part::File("profileImage", "me.png", b"")]).await)
        .await
        .unwrap();

    assert!(form.profile_image.is_none());
}

#[tokio::test]
async fn test_file_part_is_captured_with_name() {
    let form = ProfileForm::read(
        multipart(&[
            Part::File("profileImage", "me.png", b"\x89PNG-bytes"),
            Part::Text("unrelated", "ignored"),
        ])
        .await,
    )
    .await
    .unwrap();

    let image = form.profile_image.unwrap();
    assert_eq!(image.original_name.as_deref(), Some("me.png"));
    assert_eq!(&image.bytes[..], b"\x89PNG-bytes");
}

fn json_request(body: &str, content_type: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_json_body_maps_keys_to_fields() {
    let request = json_request(
        r#"{"name":"Alice B","dateOfBirth":"1990-04-12","phoneNumber":""}"#,
        "application/json",
    );

    let form = ProfileForm::from_request(request, &()).await.unwrap();
    let (update, image) = form.into_update().unwrap();

    assert_eq!(update.name, FieldUpdate::Set("Alice B".to_string()));
    assert_eq!(
        update.date_of_birth,
        FieldUpdate::Set(NaiveDate::from_ymd_opt(1990, 4, 12).unwrap())
    );
    assert_eq!(update.phone_number, FieldUpdate::Clear);
    assert!(image.is_none());
}

#[tokio::test]
async fn test_json_body_missing_and_null_keys_are_kept() {
    let request = json_request(
        r#"{"phoneNumber":null}"#,
        "application/json; charset=utf-8",
    );

    let form = ProfileForm::from_request(request, &()).await.unwrap();
    let (update, _) = form.into_update().unwrap();

    assert!(update.is_noop());
}

#[tokio::test]
async fn test_malformed_json_body_is_bad_request() {
    let request = json_request(r#"{"name":"#, "application/json");

    let result = ProfileForm::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_unsupported_content_type_is_bad_request() {
    let request = json_request("name=Alice", "text/plain");

    let result = ProfileForm::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}
