mod common;

use resimix_offer::logo::{LogoAsset, LogoResolver, LogoSource};
use tempfile::tempdir;

async fn resolve(source: LogoSource) -> LogoAsset {
    LogoResolver::new(source).resolve().await
}

// Local source

#[tokio::test]
async fn test_local_logo_resolves_to_file_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Resimix.png");
    std::fs::write(&path, [0x01, 0x02, 0x03]).unwrap();

    let asset = resolve(LogoSource::local(&path, 200, 80)).await;

    assert_eq!(
        asset,
        LogoAsset::Image {
            bytes: vec![0x01, 0x02, 0x03],
            width: 200,
            height: 80,
        }
    );
}

#[tokio::test]
async fn test_missing_local_logo_falls_back_to_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.png");

    let asset = resolve(LogoSource::local(&path, 200, 80)).await;

    match asset {
        LogoAsset::Text { label, style } => {
            assert_eq!(label, "RESIMIX S.R.L.");
            assert!(style.bold);
        }
        other => panic!("expected text fallback, got {:?}", other),
    }
}

#[tokio::test]
async fn test_directory_as_local_logo_falls_back_to_text() {
    let dir = tempdir().unwrap();
    let asset = resolve(LogoSource::local(dir.path(), 200, 80)).await;
    assert_eq!(asset, LogoAsset::placeholder());
}

#[tokio::test]
async fn test_local_logo_bytes_are_not_validated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Resimix.png");
    std::fs::write(&path, b"not an image at all").unwrap();

    let asset = resolve(LogoSource::local(&path, 10, 20)).await;

    assert_eq!(
        asset,
        LogoAsset::Image {
            bytes: b"not an image at all".to_vec(),
            width: 10,
            height: 20,
        }
    );
}

#[tokio::test]
async fn test_repeated_resolution_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Resimix.png");
    std::fs::write(&path, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]).unwrap();

    let resolver = LogoResolver::new(LogoSource::local(&path, 200, 80));
    let first = resolver.resolve().await;
    let second = resolver.resolve().await;

    assert!(first.is_image());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_forced_fallback_ignores_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Resimix.png");
    std::fs::write(&path, [0x01, 0x02, 0x03]).unwrap();

    let asset = resolve(LogoSource::local(&path, 200, 80).with_text_fallback(true)).await;
    assert_eq!(asset, LogoAsset::placeholder());
}

// Remote source

#[actix_web::test]
async fn test_remote_logo_resolves_to_response_body() {
    let body: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
    let server = common::start_logo_server(body.clone()).await;

    let asset = resolve(LogoSource::remote(server.url("/Resimix.png"), 200, 80)).await;

    assert_eq!(
        asset,
        LogoAsset::Image {
            bytes: body,
            width: 200,
            height: 80,
        }
    );
    server.stop().await;
}

#[actix_web::test]
async fn test_remote_kind_inferred_from_url() {
    let server = common::start_logo_server(vec![7, 7, 7]).await;

    let asset = resolve(LogoSource::from_location(server.url("/Resimix.png"), 50, 20)).await;

    assert_eq!(
        asset,
        LogoAsset::Image {
            bytes: vec![7, 7, 7],
            width: 50,
            height: 20,
        }
    );
    server.stop().await;
}

#[actix_web::test]
async fn test_remote_not_found_falls_back_to_text() {
    let server = common::start_logo_server(vec![1, 2, 3]).await;

    let asset = resolve(LogoSource::remote(server.url("/nope.png"), 200, 80)).await;

    assert_eq!(asset, LogoAsset::placeholder());
    server.stop().await;
}

#[actix_web::test]
async fn test_remote_server_error_falls_back_to_text() {
    let server = common::start_logo_server(vec![1, 2, 3]).await;

    let asset = resolve(LogoSource::remote(server.url("/broken.png"), 200, 80)).await;

    assert_eq!(asset, LogoAsset::placeholder());
    server.stop().await;
}

#[actix_web::test]
async fn test_remote_redirect_is_not_followed() {
    let server = common::start_logo_server(vec![1, 2, 3]).await;

    let asset = resolve(LogoSource::remote(server.url("/moved.png"), 200, 80)).await;

    assert_eq!(asset, LogoAsset::placeholder());
    server.stop().await;
}

#[tokio::test]
async fn test_remote_connection_refused_falls_back_to_text() {
    let asset = resolve(LogoSource::remote(common::refused_url(), 200, 80)).await;
    assert_eq!(asset, LogoAsset::placeholder());
}

#[tokio::test]
async fn test_remote_invalid_url_falls_back_to_text() {
    let asset = resolve(LogoSource::remote("http://", 200, 80)).await;
    assert_eq!(asset, LogoAsset::placeholder());
}
