//! Cutout against an in-process stand-in for the remove.bg API

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use stairworks_cutout::{run_cutout, CutoutArgs, CutoutError, RemoveBgClient};

const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake";

#[derive(Default)]
struct Seen {
    api_key: Option<String>,
    content_type: Option<String>,
    body: Vec<u8>,
}

/// Bind a mock on 127.0.0.1:0 and return its endpoint URL
async fn spawn_mock(status: StatusCode, reply: &'static [u8]) -> (String, Arc<Mutex<Seen>>) {
    let seen = Arc::new(Mutex::new(Seen::default()));

    let app = Router::new()
        .route(
            "/v1.0/removebg",
            post(
                move |State(seen): State<Arc<Mutex<Seen>>>, headers: HeaderMap, body: Bytes| async move {
                    let mut seen = seen.lock().unwrap();
                    seen.api_key = headers
                        .get("x-api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    seen.content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    seen.body = body.to_vec();
                    (status, reply)
                },
            ),
        )
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1.0/removebg"), seen)
}

fn args(input: std::path::PathBuf, endpoint: String) -> CutoutArgs {
    CutoutArgs {
        input,
        out: None,
        size: "preview".to_string(),
        api_key: Some("test-key".to_string()),
        endpoint,
        quiet: true,
    }
}

#[tokio::test]
async fn sends_key_and_multipart_fields() {
    let (endpoint, seen) = spawn_mock(StatusCode::OK, PNG).await;
    let client = RemoveBgClient::with_endpoint("secret", endpoint);

    let png = client
        .remove_background(b"jpeg-bytes".to_vec(), "oak.jpg", "full")
        .await
        .unwrap();
    assert_eq!(png, PNG);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.api_key.as_deref(), Some("secret"));
    assert!(seen
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&seen.body);
    assert!(body.contains(r#"name="image_file"; filename="oak.jpg""#));
    assert!(body.contains("jpeg-bytes"));
    assert!(body.contains(r#"name="size""#));
    assert!(body.contains("full"));
}

#[tokio::test]
async fn error_status_surfaces_body() {
    let (endpoint, _) = spawn_mock(StatusCode::PAYMENT_REQUIRED, b"insufficient credits").await;
    let client = RemoveBgClient::with_endpoint("secret", endpoint);

    let err = client
        .remove_background(b"x".to_vec(), "x.jpg", "auto")
        .await
        .unwrap_err();

    match &err {
        CutoutError::Api { status, body } => {
            assert_eq!(*status, StatusCode::PAYMENT_REQUIRED);
            assert_eq!(body, "insufficient credits");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("402"));
}

#[tokio::test]
async fn run_writes_response_bytes_next_to_input() {
    let (endpoint, seen) = spawn_mock(StatusCode::OK, PNG).await;
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("walnut-stair.jpg");
    std::fs::write(&input, b"photo").unwrap();

    let out = run_cutout(args(input, endpoint)).await.unwrap();

    assert_eq!(out, dir.path().join("walnut-stair-no-bg.png"));
    assert_eq!(std::fs::read(&out).unwrap(), PNG);
    assert_eq!(seen.lock().unwrap().api_key.as_deref(), Some("test-key"));
}

#[tokio::test]
async fn run_honors_out_flag() {
    let (endpoint, _) = spawn_mock(StatusCode::OK, PNG).await;
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("stair.jpg");
    std::fs::write(&input, b"photo").unwrap();
    let target = dir.path().join("cut.png");

    let mut args = args(input, endpoint);
    args.out = Some(target.clone());
    assert_eq!(run_cutout(args).await.unwrap(), target);
    assert_eq!(std::fs::read(&target).unwrap(), PNG);
}

#[tokio::test]
async fn missing_input_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.jpg");

    let err = run_cutout(args(input, "http://127.0.0.1:9/".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, CutoutError::ReadInput { .. }));
    assert!(err.to_string().contains("nope.jpg"));
}

#[tokio::test]
async fn failed_upload_writes_nothing() {
    let (endpoint, _) = spawn_mock(StatusCode::BAD_REQUEST, b"bad image").await;
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("stair.jpg");
    std::fs::write(&input, b"photo").unwrap();

    let err = run_cutout(args(input, endpoint)).await.unwrap_err();

    assert!(matches!(err, CutoutError::Api { .. }));
    assert!(!dir.path().join("stair-no-bg.png").exists());
}
