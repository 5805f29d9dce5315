use crate::{ImageStore, ImageUpload};

use bytes::Bytes;
use tempfile::TempDir;

fn store() -> (TempDir, ImageStore) {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::new(temp.path(), "/uploads/");
    (temp, store)
}

fn upload(name: Option<&str>, bytes: &'static [u8]) -> ImageUpload {
    ImageUpload {
        original_name: name.map(str::to_owned),
        bytes: Bytes::from_static(bytes),
    }
}

#[test]
fn test_url_prefix_is_trimmed() {
    let (_temp, store) = store();

    assert_eq!(store.url_prefix(), "uploads");
}

#[test]
fn test_unique_file_name_keeps_lowercased_extension() {
    let name = ImageStore::unique_file_name(Some("Portrait.JPG"));

    assert!(name.ends_with(".jpg"));
    let stem = name.trim_end_matches(".jpg");
    let (millis, hex) = stem.split_once('-').unwrap();
    assert!(millis.parse::<i64>().is_ok());
    assert_eq!(hex.len(), 8);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_unique_file_name_drops_suspicious_extension() {
    assert!(!ImageStore::unique_file_name(Some("x.tar.gz/../../etc")).contains('/'));
    assert!(!ImageStore::unique_file_name(Some("evil.verylongext")).contains('.'));
    assert!(!ImageStore::unique_file_name(None).contains('.'));
}

#[test]
fn test_unique_file_names_do_not_collide() {
    let a = ImageStore::unique_file_name(Some("a.png"));
    let b = ImageStore::unique_file_name(Some("a.png"));

    assert_ne!(a, b);
}

#[tokio::test]
async fn test_save_writes_bytes_and_returns_reference() {
    let (_temp, store) = store();

    let reference = store.save(&upload(Some("me.png"), b"image")).await.unwrap();

    assert!(reference.starts_with("uploads/"));
    let file_name = reference.trim_start_matches("uploads/");
    let written = std::fs::read(store.root().join(file_name)).unwrap();
    assert_eq!(written, b"image");
}

#[tokio::test]
async fn test_remove_deletes_saved_blob() {
    let (_temp, store) = store();
    let reference = store.save(&upload(None, b"image")).await.unwrap();

    store.remove(&reference).await.unwrap();

    let file_name = reference.trim_start_matches("uploads/");
    assert!(!store.root().join(file_name).exists());
}

#[tokio::test]
async fn test_remove_rejects_path_traversal() {
    let (_temp, store) = store();

    assert!(store.remove("uploads/../config.toml").await.is_err());
    assert!(store.remove("elsewhere/file.png").await.is_err());
}

#[tokio::test]
async fn test_save_into_missing_directory_is_image_store_error() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::new(temp.path().join("missing"), "uploads");

    let result = store.save(&upload(None, b"image")).await;

    assert!(matches!(result, Err(crate::ServiceError::ImageStore { .. })));
}

#[tokio::test]
async fn test_ensure_root_creates_directory() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::new(temp.path().join("nested/uploads"), "uploads");

    store.ensure_root().await.unwrap();

    assert!(store.root().is_dir());
}

#[tokio::test]
async fn test_is_available_tracks_directory() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::new(temp.path().join("uploads"), "uploads");

    assert!(!store.is_available().await);

    store.ensure_root().await.unwrap();

    assert!(store.is_available().await);
}
