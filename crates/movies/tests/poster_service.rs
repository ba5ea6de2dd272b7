use movies::{PosterError, PosterService};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

fn service_for(server: &MockServer, dir: &tempfile::TempDir) -> PosterService {
    PosterService::with_base_url(
        reqwest::Client::new(),
        dir.path().join("posters"),
        server.uri(),
    )
}

#[tokio::test]
async fn downloads_and_caches_poster() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/poster.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG_BYTES))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server, &dir);

    let first = service.cached("/poster.jpg").await.unwrap();
    assert_eq!(tokio::fs::read(&first).await.unwrap(), JPEG_BYTES);

    // Second lookup is served from disk; the mock's expect(1) verifies
    // no second request is made.
    let second = service.cached("/poster.jpg").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_image_maps_to_api_error() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/missing.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let service = service_for(&server, &dir);
    let err = service.cached("/missing.jpg").await.unwrap_err();

    match err {
        PosterError::Api { status_code, path } => {
            assert_eq!(status_code, 404);
            assert_eq!(path, "/missing.jpg");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(!dir.path().join("posters").join("missing.jpg").exists());
}

#[tokio::test]
async fn failed_download_leaves_no_partial_file() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/flaky.jpg"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = service_for(&server, &dir);
    assert!(service.cached("/flaky.jpg").await.is_err());

    let posters_dir = dir.path().join("posters");
    if posters_dir.exists() {
        let mut entries = tokio::fs::read_dir(&posters_dir).await.unwrap();
        assert!(entries.next_entry().await.unwrap().is_none());
    }
}
