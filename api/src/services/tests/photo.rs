use std::io::Write;
use std::path::Path;

use crate::error::ApiError;
use crate::services::photo::{PHOTO_FIELD, load_photo, mime_for};

#[test]
fn test_mime_follows_extension() {
    assert_eq!(mime_for(Path::new("images/cat1.jpg")), "image/jpeg");
    assert_eq!(mime_for(Path::new("images/CAT1.JPEG")), "image/jpeg");
    assert_eq!(mime_for(Path::new("images/dog.png")), "image/png");
    assert_eq!(mime_for(Path::new("images/haha_image.txt")), "application/octet-stream");
    assert_eq!(mime_for(Path::new("images/what_this.zip")), "application/octet-stream");
    assert_eq!(mime_for(Path::new("images/no_extension")), "application/octet-stream");
}

#[tokio::test]
async fn test_load_photo_reads_bytes_and_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("haha_image.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"not an image").unwrap();

    let part = load_photo(&path).await.unwrap();

    assert_eq!(part.field, PHOTO_FIELD);
    assert_eq!(part.file_name, "haha_image.txt");
    assert_eq!(part.mime, "application/octet-stream");
    assert_eq!(part.bytes, b"not an image".to_vec());
}

#[tokio::test]
async fn test_load_photo_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.jpg");

    match load_photo(&path).await {
        Err(ApiError::Fixture { path: reported, source }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected fixture error, got {other:?}"),
    }
}
