// SPDX-License-Identifier: Apache-2.0

use folio_server::{build_router, ApiConfig, AppState};
use folio_store::SkillStore;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;

async fn spawn_server(admin_enabled: bool, max_upload_bytes: usize) -> (String, tempfile::TempDir) {
    let upload_dir = tempfile::tempdir().expect("tempdir");
    let store = SkillStore::open_in_memory().expect("store");
    let api = ApiConfig {
        admin_enabled,
        max_upload_bytes,
        upload_root: upload_dir.path().to_path_buf(),
        ..ApiConfig::default()
    };
    let app = build_router(AppState::new(store, api));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    (format!("http://{addr}"), upload_dir)
}

async fn send_upload(base: &str, part: Part) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base}/api/upload"))
        .multipart(Form::new().part("file", part))
        .send()
        .await
        .expect("upload request")
}

fn dir_entry_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).expect("read_dir").count()
}

#[tokio::test]
async fn png_upload_returns_digit_named_url_and_identical_bytes() {
    let (base, upload_dir) = spawn_server(true, 5 * 1024 * 1024).await;
    let body = vec![0x89_u8, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x42];

    let part = Part::bytes(body.clone())
        .file_name("logo.png")
        .mime_str("image/png")
        .expect("part");
    let resp = send_upload(&base, part).await;
    assert_eq!(resp.status(), 200);
    let payload: Value = resp.json().await.expect("json");
    let url = payload["url"].as_str().expect("url");

    let stem = url
        .strip_prefix("/skills/skill-")
        .and_then(|s| s.strip_suffix(".png"))
        .expect("url shape");
    assert!(!stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()));

    let filename = url.strip_prefix("/skills/").expect("filename");
    let on_disk = std::fs::read(upload_dir.path().join(filename)).expect("stored file");
    assert_eq!(on_disk, body);

    // Served back as static content with the right type.
    let fetched = reqwest::get(format!("{base}{url}")).await.expect("fetch");
    assert_eq!(fetched.status(), 200);
    assert_eq!(
        fetched
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    assert_eq!(fetched.bytes().await.expect("bytes").to_vec(), body);
}

#[tokio::test]
async fn disallowed_type_is_rejected_without_writing() {
    let (base, upload_dir) = spawn_server(true, 5 * 1024 * 1024).await;
    let part = Part::bytes(b"hello".to_vec())
        .file_name("notes.txt")
        .mime_str("text/plain")
        .expect("part");
    let resp = send_upload(&base, part).await;
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.expect("json");
    assert_eq!(err["error"]["code"], "invalid_file_type");
    assert_eq!(dir_entry_count(upload_dir.path()), 0);
}

#[tokio::test]
async fn missing_file_field_is_a_400() {
    let (base, upload_dir) = spawn_server(true, 5 * 1024 * 1024).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/upload"))
        .multipart(Form::new().text("other", "value"))
        .send()
        .await
        .expect("upload request");
    assert_eq!(resp.status(), 400);
    let err: Value = resp.json().await.expect("json");
    assert_eq!(err["error"]["code"], "no_file_received");
    assert_eq!(dir_entry_count(upload_dir.path()), 0);
}

#[tokio::test]
async fn oversized_upload_is_a_413() {
    let (base, upload_dir) = spawn_server(true, 1024).await;
    let part = Part::bytes(vec![0_u8; 4096])
        .file_name("big.png")
        .mime_str("image/png")
        .expect("part");
    let resp = send_upload(&base, part).await;
    assert_eq!(resp.status(), 413);
    assert_eq!(dir_entry_count(upload_dir.path()), 0);
}

#[tokio::test]
async fn svg_without_client_extension_gets_one_from_the_declared_type() {
    let (base, _upload_dir) = spawn_server(true, 5 * 1024 * 1024).await;
    let part = Part::bytes(b"<svg xmlns='http://www.w3.org/2000/svg'/>".to_vec())
        .mime_str("image/svg+xml")
        .expect("part");
    let resp = send_upload(&base, part).await;
    assert_eq!(resp.status(), 200);
    let payload: Value = resp.json().await.expect("json");
    let url = payload["url"].as_str().expect("url");
    assert!(url.ends_with(".svg"), "{url}");
}

#[tokio::test]
async fn upload_hides_behind_the_deployment_flag() {
    let (base, upload_dir) = spawn_server(false, 5 * 1024 * 1024).await;
    let part = Part::bytes(vec![0x89_u8, 0x50, 0x4e, 0x47])
        .file_name("logo.png")
        .mime_str("image/png")
        .expect("part");
    let resp = send_upload(&base, part).await;
    assert_eq!(resp.status(), 404);
    assert_eq!(dir_entry_count(upload_dir.path()), 0);
}

#[tokio::test]
async fn unknown_static_path_is_a_404() {
    let (base, _upload_dir) = spawn_server(true, 5 * 1024 * 1024).await;
    let resp = reqwest::get(format!("{base}/skills/skill-0.png"))
        .await
        .expect("fetch");
    assert_eq!(resp.status(), 404);
}
