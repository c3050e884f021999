// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::{admin_disabled_response, api_error_response};
use crate::AppState;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_api::{ApiError, ApiErrorCode, UploadResponseDto};
use rand::Rng;
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{error, info};

const ALLOWED_TYPES: &[&str] = &["image/png", "image/jpeg", "image/svg+xml"];

fn extension_for(file_name: Option<&str>, content_type: &str) -> String {
    if let Some(name) = file_name {
        if let Some((_, ext)) = name.rsplit_once('.') {
            if !ext.is_empty()
                && ext.len() <= 8
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return ext.to_ascii_lowercase();
            }
        }
    }
    match content_type {
        "image/png" => "png".to_string(),
        "image/jpeg" => "jpg".to_string(),
        _ => "svg".to_string(),
    }
}

/// `skill-<epoch-millis><6-digit nonce>.<ext>`: all digits before the
/// dot, so the published URL shape stays stable while two uploads in
/// the same millisecond no longer collide.
fn upload_filename(extension: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let nonce: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("skill-{millis}{nonce:06}.{extension}")
}

pub(crate) async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    if !state.api.admin_enabled {
        return admin_disabled_response();
    }
    let request_id = state.next_request_id();
    info!(request_id = %request_id, route = "/api/upload", "request start");

    let mut file: Option<(Option<String>, String, Vec<u8>)> = None;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
                    return api_error_response(ApiError::new(
                        ApiErrorCode::PayloadTooLarge,
                        "File exceeds the maximum upload size",
                        json!({"max_bytes": state.api.max_upload_bytes}),
                    ));
                }
                return api_error_response(ApiError::new(
                    ApiErrorCode::NoFileReceived,
                    "No file received",
                    json!({"reason": e.to_string()}),
                ));
            }
        };
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = match field.bytes().await {
            Ok(b) => b.to_vec(),
            Err(e) => {
                if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
                    return api_error_response(ApiError::new(
                        ApiErrorCode::PayloadTooLarge,
                        "File exceeds the maximum upload size",
                        json!({"max_bytes": state.api.max_upload_bytes}),
                    ));
                }
                return api_error_response(ApiError::new(
                    ApiErrorCode::NoFileReceived,
                    "No file received",
                    json!({"reason": e.to_string()}),
                ));
            }
        };
        file = Some((file_name, content_type, bytes));
        break;
    }

    let Some((file_name, content_type, bytes)) = file else {
        return api_error_response(ApiError::new(
            ApiErrorCode::NoFileReceived,
            "No file received",
            json!({}),
        ));
    };

    // Declared-type allowlist only; nothing here sniffs the content.
    if !ALLOWED_TYPES.contains(&content_type.as_str()) {
        return api_error_response(ApiError::new(
            ApiErrorCode::InvalidFileType,
            "Invalid file type. Only PNG, JPG, JPEG, and SVG are allowed",
            json!({"content_type": content_type}),
        ));
    }
    if bytes.len() > state.api.max_upload_bytes {
        return api_error_response(ApiError::new(
            ApiErrorCode::PayloadTooLarge,
            "File exceeds the maximum upload size",
            json!({"max_bytes": state.api.max_upload_bytes}),
        ));
    }

    let filename = upload_filename(&extension_for(file_name.as_deref(), &content_type));
    let path = state.api.upload_root.join(&filename);
    if let Err(e) = tokio::fs::create_dir_all(&state.api.upload_root).await {
        error!(request_id = %request_id, "upload dir create failed: {e}");
        return api_error_response(ApiError::internal("Failed to upload file"));
    }
    if let Err(e) = tokio::fs::write(&path, &bytes).await {
        error!(request_id = %request_id, "upload write failed: {e}");
        return api_error_response(ApiError::internal("Failed to upload file"));
    }

    let url = format!("{}/{}", state.api.public_prefix, filename);
    info!(request_id = %request_id, url = %url, bytes = bytes.len(), "upload stored");
    Json(UploadResponseDto { url }).into_response()
}
